use std::fmt;

/// Bounds for one numeric setting: the valid closed range, the increment
/// applied by a stepping control, and the value fresh schemes start with.
///
/// `step` is the granularity of the stepping affordance, not a write-time
/// grid: several documented defaults (water rise 47, turn time 45) do not
/// sit on a multiple of their step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingSpec {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
}

impl SettingSpec {
    /// Clamps a raw value into `[min, max]`.
    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }

    /// Moves `value` by `steps` increments of `step`, clamped to the range.
    pub fn adjust(&self, value: i32, steps: i32) -> i32 {
        self.clamp(value.saturating_add(self.step.saturating_mul(steps)))
    }
}

/// The boolean gameplay toggles, in the order the editor presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierField {
    FortMode,
    DivideTeams,
    SolidLand,
    AddBorder,
    LowGravity,
    LaserSight,
    Invulnerable,
    ResetHealth,
    Vampirism,
    Karma,
    Artillery,
    RandomOrder,
    KingMode,
    PlaceHedgehogs,
    SharedAmmo,
    DisableGirders,
    DisableLandObjects,
    AiSurvival,
    InfiniteAttack,
    ResetWeapons,
    PerHedgehogAmmo,
    NoWind,
    MoreWind,
    TagTeam,
}

impl ModifierField {
    pub const ALL: [ModifierField; 24] = [
        ModifierField::FortMode,
        ModifierField::DivideTeams,
        ModifierField::SolidLand,
        ModifierField::AddBorder,
        ModifierField::LowGravity,
        ModifierField::LaserSight,
        ModifierField::Invulnerable,
        ModifierField::ResetHealth,
        ModifierField::Vampirism,
        ModifierField::Karma,
        ModifierField::Artillery,
        ModifierField::RandomOrder,
        ModifierField::KingMode,
        ModifierField::PlaceHedgehogs,
        ModifierField::SharedAmmo,
        ModifierField::DisableGirders,
        ModifierField::DisableLandObjects,
        ModifierField::AiSurvival,
        ModifierField::InfiniteAttack,
        ModifierField::ResetWeapons,
        ModifierField::PerHedgehogAmmo,
        ModifierField::NoWind,
        ModifierField::MoreWind,
        ModifierField::TagTeam,
    ];

    /// Machine name, matching the serialized field name.
    pub fn name(&self) -> &'static str {
        match self {
            ModifierField::FortMode => "fort_mode",
            ModifierField::DivideTeams => "divide_teams",
            ModifierField::SolidLand => "solid_land",
            ModifierField::AddBorder => "add_border",
            ModifierField::LowGravity => "low_gravity",
            ModifierField::LaserSight => "laser_sight",
            ModifierField::Invulnerable => "invulnerable",
            ModifierField::ResetHealth => "reset_health",
            ModifierField::Vampirism => "vampirism",
            ModifierField::Karma => "karma",
            ModifierField::Artillery => "artillery",
            ModifierField::RandomOrder => "random_order",
            ModifierField::KingMode => "king_mode",
            ModifierField::PlaceHedgehogs => "place_hedgehogs",
            ModifierField::SharedAmmo => "shared_ammo",
            ModifierField::DisableGirders => "disable_girders",
            ModifierField::DisableLandObjects => "disable_land_objects",
            ModifierField::AiSurvival => "ai_survival",
            ModifierField::InfiniteAttack => "infinite_attack",
            ModifierField::ResetWeapons => "reset_weapons",
            ModifierField::PerHedgehogAmmo => "per_hedgehog_ammo",
            ModifierField::NoWind => "no_wind",
            ModifierField::MoreWind => "more_wind",
            ModifierField::TagTeam => "tag_team",
        }
    }

    /// Label used by the editor UI.
    pub fn label(&self) -> &'static str {
        match self {
            ModifierField::FortMode => "Fort Mode",
            ModifierField::DivideTeams => "Divide Teams",
            ModifierField::SolidLand => "Solid Land",
            ModifierField::AddBorder => "Add Border",
            ModifierField::LowGravity => "Low Gravity",
            ModifierField::LaserSight => "Laser Sight",
            ModifierField::Invulnerable => "Invulnerable",
            ModifierField::ResetHealth => "Reset Health",
            ModifierField::Vampirism => "Vampirism",
            ModifierField::Karma => "Karma",
            ModifierField::Artillery => "Artillery",
            ModifierField::RandomOrder => "Random Order",
            ModifierField::KingMode => "King",
            ModifierField::PlaceHedgehogs => "Place Hedgehogs",
            ModifierField::SharedAmmo => "Clan Shares Ammo",
            ModifierField::DisableGirders => "Disable Girders",
            ModifierField::DisableLandObjects => "Disable Land Objects",
            ModifierField::AiSurvival => "AI Survival Mode",
            ModifierField::InfiniteAttack => "Unlimited Attacks",
            ModifierField::ResetWeapons => "Reset Weapons",
            ModifierField::PerHedgehogAmmo => "Per Hedgehog Ammo",
            ModifierField::NoWind => "Disable Wind",
            ModifierField::MoreWind => "More Wind",
            ModifierField::TagTeam => "Tag Team",
        }
    }

    /// Parse a machine name back into a field.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == s)
    }
}

impl fmt::Display for ModifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The bounded numeric settings, in the order the editor presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    DamageModifier,
    TurnTime,
    InitHealth,
    SuddenDeathTimeout,
    WaterRise,
    HealthDecrease,
    RopeModifier,
    CrateFrequency,
    HealthCrateChance,
    CrateHealth,
    MinesTime,
    MineCount,
    DudMineChance,
    ExplosiveCount,
    GetAwayTime,
}

impl SettingField {
    pub const ALL: [SettingField; 15] = [
        SettingField::DamageModifier,
        SettingField::TurnTime,
        SettingField::InitHealth,
        SettingField::SuddenDeathTimeout,
        SettingField::WaterRise,
        SettingField::HealthDecrease,
        SettingField::RopeModifier,
        SettingField::CrateFrequency,
        SettingField::HealthCrateChance,
        SettingField::CrateHealth,
        SettingField::MinesTime,
        SettingField::MineCount,
        SettingField::DudMineChance,
        SettingField::ExplosiveCount,
        SettingField::GetAwayTime,
    ];

    /// Range, step and default for this setting.
    pub fn spec(&self) -> SettingSpec {
        match self {
            SettingField::DamageModifier => SettingSpec { min: 10, max: 300, step: 25, default: 100 },
            SettingField::TurnTime => SettingSpec { min: 1, max: 9999, step: 15, default: 45 },
            SettingField::InitHealth => SettingSpec { min: 50, max: 200, step: 25, default: 100 },
            SettingField::SuddenDeathTimeout => SettingSpec { min: 0, max: 50, step: 3, default: 15 },
            SettingField::WaterRise => SettingSpec { min: 0, max: 100, step: 5, default: 47 },
            SettingField::HealthDecrease => SettingSpec { min: 0, max: 100, step: 1, default: 5 },
            SettingField::RopeModifier => SettingSpec { min: 25, max: 999, step: 25, default: 100 },
            SettingField::CrateFrequency => SettingSpec { min: 0, max: 9, step: 1, default: 5 },
            SettingField::HealthCrateChance => SettingSpec { min: 0, max: 100, step: 5, default: 35 },
            SettingField::CrateHealth => SettingSpec { min: 0, max: 200, step: 5, default: 25 },
            SettingField::MinesTime => SettingSpec { min: -1, max: 5, step: 1, default: 3 },
            SettingField::MineCount => SettingSpec { min: 0, max: 80, step: 5, default: 0 },
            SettingField::DudMineChance => SettingSpec { min: 0, max: 100, step: 5, default: 0 },
            SettingField::ExplosiveCount => SettingSpec { min: 0, max: 40, step: 1, default: 0 },
            SettingField::GetAwayTime => SettingSpec { min: 0, max: 999, step: 25, default: 100 },
        }
    }

    /// Machine name, matching the serialized field name.
    pub fn name(&self) -> &'static str {
        match self {
            SettingField::DamageModifier => "damage_modifier",
            SettingField::TurnTime => "turn_time",
            SettingField::InitHealth => "init_health",
            SettingField::SuddenDeathTimeout => "sudden_death_timeout",
            SettingField::WaterRise => "water_rise",
            SettingField::HealthDecrease => "health_decrease",
            SettingField::RopeModifier => "rope_modifier",
            SettingField::CrateFrequency => "crate_frequency",
            SettingField::HealthCrateChance => "health_crate_chance",
            SettingField::CrateHealth => "crate_health",
            SettingField::MinesTime => "mines_time",
            SettingField::MineCount => "mine_count",
            SettingField::DudMineChance => "dud_mine_chance",
            SettingField::ExplosiveCount => "explosive_count",
            SettingField::GetAwayTime => "get_away_time",
        }
    }

    /// Label used by the editor UI.
    pub fn label(&self) -> &'static str {
        match self {
            SettingField::DamageModifier => "Damage Modifier",
            SettingField::TurnTime => "Turn Time",
            SettingField::InitHealth => "Initial Health",
            SettingField::SuddenDeathTimeout => "Sudden Death Timeout",
            SettingField::WaterRise => "Sudden Death Water Rise",
            SettingField::HealthDecrease => "Sudden Death Health Decrease",
            SettingField::RopeModifier => "% Rope Length",
            SettingField::CrateFrequency => "Crate Drops",
            SettingField::HealthCrateChance => "% Health Crates",
            SettingField::CrateHealth => "Health in Crates",
            SettingField::MinesTime => "Mines Time",
            SettingField::MineCount => "Mines",
            SettingField::DudMineChance => "% Dud Mines",
            SettingField::ExplosiveCount => "Explosives",
            SettingField::GetAwayTime => "% Get Away Time",
        }
    }

    /// Parse a machine name back into a field.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == s)
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_into_range() {
        let spec = SettingField::DamageModifier.spec();
        assert_eq!(spec.clamp(5), 10);
        assert_eq!(spec.clamp(150), 150);
        assert_eq!(spec.clamp(1000), 300);
    }

    #[test]
    fn test_adjust_moves_by_step_and_clamps() {
        let spec = SettingField::DamageModifier.spec();
        assert_eq!(spec.adjust(100, 1), 125);
        assert_eq!(spec.adjust(100, -2), 50);
        assert_eq!(spec.adjust(290, 1), 300);
        assert_eq!(spec.adjust(10, -1), 10);
    }

    #[test]
    fn test_mines_time_allows_random_sentinel() {
        let spec = SettingField::MinesTime.spec();
        assert_eq!(spec.clamp(-1), -1);
        assert_eq!(spec.clamp(-5), -1);
        assert_eq!(spec.clamp(6), 5);
    }

    #[test]
    fn test_defaults_are_in_range() {
        for field in SettingField::ALL {
            let spec = field.spec();
            assert!(
                spec.min <= spec.default && spec.default <= spec.max,
                "default out of range for {}",
                field.name()
            );
        }
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in ModifierField::ALL {
            assert_eq!(ModifierField::from_name(field.name()), Some(field));
        }
        for field in SettingField::ALL {
            assert_eq!(SettingField::from_name(field.name()), Some(field));
        }
        assert_eq!(SettingField::from_name("no_such_field"), None);
    }
}
