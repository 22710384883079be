use serde::{Deserialize, Serialize};

use crate::fields::{ModifierField, SettingField};

/// The boolean gameplay toggles of a scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub fort_mode: bool,
    pub divide_teams: bool,
    pub solid_land: bool,
    pub add_border: bool,
    pub low_gravity: bool,
    pub laser_sight: bool,
    pub invulnerable: bool,
    pub reset_health: bool,
    pub vampirism: bool,
    pub karma: bool,
    pub artillery: bool,
    pub random_order: bool,
    pub king_mode: bool,
    pub place_hedgehogs: bool,
    pub shared_ammo: bool,
    pub disable_girders: bool,
    pub disable_land_objects: bool,
    pub ai_survival: bool,
    pub infinite_attack: bool,
    pub reset_weapons: bool,
    pub per_hedgehog_ammo: bool,
    pub no_wind: bool,
    pub more_wind: bool,
    pub tag_team: bool,
}

impl Modifiers {
    pub fn get(&self, field: ModifierField) -> bool {
        match field {
            ModifierField::FortMode => self.fort_mode,
            ModifierField::DivideTeams => self.divide_teams,
            ModifierField::SolidLand => self.solid_land,
            ModifierField::AddBorder => self.add_border,
            ModifierField::LowGravity => self.low_gravity,
            ModifierField::LaserSight => self.laser_sight,
            ModifierField::Invulnerable => self.invulnerable,
            ModifierField::ResetHealth => self.reset_health,
            ModifierField::Vampirism => self.vampirism,
            ModifierField::Karma => self.karma,
            ModifierField::Artillery => self.artillery,
            ModifierField::RandomOrder => self.random_order,
            ModifierField::KingMode => self.king_mode,
            ModifierField::PlaceHedgehogs => self.place_hedgehogs,
            ModifierField::SharedAmmo => self.shared_ammo,
            ModifierField::DisableGirders => self.disable_girders,
            ModifierField::DisableLandObjects => self.disable_land_objects,
            ModifierField::AiSurvival => self.ai_survival,
            ModifierField::InfiniteAttack => self.infinite_attack,
            ModifierField::ResetWeapons => self.reset_weapons,
            ModifierField::PerHedgehogAmmo => self.per_hedgehog_ammo,
            ModifierField::NoWind => self.no_wind,
            ModifierField::MoreWind => self.more_wind,
            ModifierField::TagTeam => self.tag_team,
        }
    }

    pub fn set(&mut self, field: ModifierField, value: bool) {
        match field {
            ModifierField::FortMode => self.fort_mode = value,
            ModifierField::DivideTeams => self.divide_teams = value,
            ModifierField::SolidLand => self.solid_land = value,
            ModifierField::AddBorder => self.add_border = value,
            ModifierField::LowGravity => self.low_gravity = value,
            ModifierField::LaserSight => self.laser_sight = value,
            ModifierField::Invulnerable => self.invulnerable = value,
            ModifierField::ResetHealth => self.reset_health = value,
            ModifierField::Vampirism => self.vampirism = value,
            ModifierField::Karma => self.karma = value,
            ModifierField::Artillery => self.artillery = value,
            ModifierField::RandomOrder => self.random_order = value,
            ModifierField::KingMode => self.king_mode = value,
            ModifierField::PlaceHedgehogs => self.place_hedgehogs = value,
            ModifierField::SharedAmmo => self.shared_ammo = value,
            ModifierField::DisableGirders => self.disable_girders = value,
            ModifierField::DisableLandObjects => self.disable_land_objects = value,
            ModifierField::AiSurvival => self.ai_survival = value,
            ModifierField::InfiniteAttack => self.infinite_attack = value,
            ModifierField::ResetWeapons => self.reset_weapons = value,
            ModifierField::PerHedgehogAmmo => self.per_hedgehog_ammo = value,
            ModifierField::NoWind => self.no_wind = value,
            ModifierField::MoreWind => self.more_wind = value,
            ModifierField::TagTeam => self.tag_team = value,
        }
    }
}

/// The bounded numeric settings of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub damage_modifier: i32,
    pub turn_time: i32,
    pub init_health: i32,
    pub sudden_death_timeout: i32,
    pub water_rise: i32,
    pub health_decrease: i32,
    pub rope_modifier: i32,
    pub crate_frequency: i32,
    pub health_crate_chance: i32,
    pub crate_health: i32,
    /// -1 means "random".
    pub mines_time: i32,
    pub mine_count: i32,
    pub dud_mine_chance: i32,
    pub explosive_count: i32,
    pub get_away_time: i32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            damage_modifier: SettingField::DamageModifier.spec().default,
            turn_time: SettingField::TurnTime.spec().default,
            init_health: SettingField::InitHealth.spec().default,
            sudden_death_timeout: SettingField::SuddenDeathTimeout.spec().default,
            water_rise: SettingField::WaterRise.spec().default,
            health_decrease: SettingField::HealthDecrease.spec().default,
            rope_modifier: SettingField::RopeModifier.spec().default,
            crate_frequency: SettingField::CrateFrequency.spec().default,
            health_crate_chance: SettingField::HealthCrateChance.spec().default,
            crate_health: SettingField::CrateHealth.spec().default,
            mines_time: SettingField::MinesTime.spec().default,
            mine_count: SettingField::MineCount.spec().default,
            dud_mine_chance: SettingField::DudMineChance.spec().default,
            explosive_count: SettingField::ExplosiveCount.spec().default,
            get_away_time: SettingField::GetAwayTime.spec().default,
        }
    }
}

impl Settings {
    pub fn get(&self, field: SettingField) -> i32 {
        match field {
            SettingField::DamageModifier => self.damage_modifier,
            SettingField::TurnTime => self.turn_time,
            SettingField::InitHealth => self.init_health,
            SettingField::SuddenDeathTimeout => self.sudden_death_timeout,
            SettingField::WaterRise => self.water_rise,
            SettingField::HealthDecrease => self.health_decrease,
            SettingField::RopeModifier => self.rope_modifier,
            SettingField::CrateFrequency => self.crate_frequency,
            SettingField::HealthCrateChance => self.health_crate_chance,
            SettingField::CrateHealth => self.crate_health,
            SettingField::MinesTime => self.mines_time,
            SettingField::MineCount => self.mine_count,
            SettingField::DudMineChance => self.dud_mine_chance,
            SettingField::ExplosiveCount => self.explosive_count,
            SettingField::GetAwayTime => self.get_away_time,
        }
    }

    /// Stores `value` clamped into the field's range, returning what was stored.
    pub fn set_clamped(&mut self, field: SettingField, value: i32) -> i32 {
        let stored = field.spec().clamp(value);
        match field {
            SettingField::DamageModifier => self.damage_modifier = stored,
            SettingField::TurnTime => self.turn_time = stored,
            SettingField::InitHealth => self.init_health = stored,
            SettingField::SuddenDeathTimeout => self.sudden_death_timeout = stored,
            SettingField::WaterRise => self.water_rise = stored,
            SettingField::HealthDecrease => self.health_decrease = stored,
            SettingField::RopeModifier => self.rope_modifier = stored,
            SettingField::CrateFrequency => self.crate_frequency = stored,
            SettingField::HealthCrateChance => self.health_crate_chance = stored,
            SettingField::CrateHealth => self.crate_health = stored,
            SettingField::MinesTime => self.mines_time = stored,
            SettingField::MineCount => self.mine_count = stored,
            SettingField::DudMineChance => self.dud_mine_chance = stored,
            SettingField::ExplosiveCount => self.explosive_count = stored,
            SettingField::GetAwayTime => self.get_away_time = stored,
        }
        stored
    }
}

/// A named preset of gameplay rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    pub name: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    #[serde(default)]
    pub settings: Settings,
}

impl Scheme {
    /// Creates a scheme with every field at its default value.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::default(),
            settings: Settings::default(),
        }
    }
}

/// The built-in presets occupying the leading rows of every store.
pub fn default_schemes() -> Vec<Scheme> {
    let default = Scheme::new("Default");

    let mut pro_mode = Scheme::new("Pro Mode");
    pro_mode.settings.turn_time = 15;
    pro_mode.settings.crate_frequency = 0;

    let mut shoppa = Scheme::new("Shoppa");
    shoppa.modifiers.solid_land = true;
    shoppa.modifiers.shared_ammo = true;
    shoppa.settings.turn_time = 30;
    shoppa.settings.crate_frequency = 1;
    shoppa.settings.health_crate_chance = 0;
    shoppa.settings.sudden_death_timeout = 50;

    let mut clean_slate = Scheme::new("Clean Slate");
    clean_slate.modifiers.reset_health = true;
    clean_slate.modifiers.reset_weapons = true;
    clean_slate.modifiers.infinite_attack = true;

    let mut minefield = Scheme::new("Minefield");
    minefield.modifiers.disable_girders = true;
    minefield.settings.mine_count = 80;
    minefield.settings.mines_time = 0;
    minefield.settings.crate_frequency = 0;

    vec![default, pro_mode, shoppa, clean_slate, minefield]
}
