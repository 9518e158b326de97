//! Static league data: gamertag word lists, the named player roster,
//! map definitions and staff tier tables.

use once_cell::sync::Lazy;

use crate::models::{GameMap, Role, StaffRole, StaffTier};

/// Length of a regular season in match weeks.
pub const TOTAL_SEASON_WEEKS: u32 = 14;

/// Number of franchises in the league. Must stay even for the round robin.
pub const LEAGUE_SIZE: usize = 8;

/// Rounds in the entry draft.
pub const DRAFT_ROUNDS: usize = 8;

/// Total players generated into each season's draft pool.
pub const DRAFT_POOL_SIZE: usize = 120;

/// Named veterans drawn from [`REAL_PLAYER_NAMES`] into each pool; the
/// remaining slots are filled with generated rookies.
pub const NAMED_POOL_DRAW: usize = 100;

/// Filler players at the front of the random batch forced to Legend tier.
pub const POOL_FORCED_LEGENDS: usize = 8;

/// Chance that a named player rolls as a Legend.
pub const NAMED_LEGEND_CHANCE: f64 = 0.15;

/// Budget every franchise starts a campaign with.
pub const STARTING_BUDGET: i64 = 250;

/// Players fielded per match.
pub const STARTERS: usize = 5;

/// Per-pick draft clock, in ticks.
pub const DRAFT_CLOCK: u32 = 300;

pub const TAG_PREFIXES: &[&str] = &[
    "Shadow", "Void", "Ghost", "Neon", "Cyber", "Dark", "Light", "Iron", "Steel", "Venom",
    "Frost", "Blaze", "Storm", "Viper", "Rogue", "Elite", "Pro", "X", "Zero", "Alpha",
];

pub const TAG_SUFFIXES: &[&str] = &[
    "Wolf", "Ops", "Slayer", "King", "God", "Bot", "Aim", "Shot", "Strike", "Force", "Squad",
    "Clan", "Reaper", "Phantom", "Spectre", "Knight", "Ninja", "Samurai",
];

pub const LEGEND_TAGS: &[&str] = &[
    "Shroud", "Faker", "S1mple", "Ninja", "Tenz", "Scump", "Crimsix", "Karma", "Hiko",
    "Device", "Niko", "Zywoo", "Coldzera",
];

pub const SQUAD_NAME_PRESETS: &[&str] = &[
    "Power", "Pwned.nL", "Terrorist", "Monster", "Force", "Pure Luck", "DiCE", "Prime", "sk8",
    "Spastic", "Pallies", "Pirates", "Disoblige", "Veloce", "Dragonguard", "PUMA", "Anti-Scrub",
    "Rejected Basers", "TeKs", "Paladen", "-FINAL-", "Grapevine",
];

/// Veteran community players seeded into every draft pool by name.
pub const REAL_PLAYER_NAMES: &[&str] = &[
    "bike", "Turban", "Commodo", "Creature", "Mikkiz", "animeboy12", "Riverside", "Tripin",
    "Bad Badger", "TJ hazuki", "Hercules", "Captor", "Henry Saari", "retroaction",
    "Sunny DBZaiti", "Product", "Dutch Baser", "Sk", "Da Paz", "Sulla", "Cyclone", "berzerk",
    "Rampage", "Bombed", "Rough", "Cintra", "Cig Smoke", "bick", "Best", "Geio",
    "Clark Kentaro", "rucci", "Hasbulla", "Beast", "Pawner", "Cow Lives Matter", "Harder",
    "gbone", "DBZ", "Draft", "deathclown420", "dak", "Azuline", "siaxis", "nbsIDE Domu",
    "download", "MythriL", "hellkite", "Bacon", "Mercede$", "Refer", "Raazi", "SpookedOne",
    "CZ530", "Jz", "Spectacular", "Rylo", "Rekashi", "Ixador", "Dameon Angell", "dmr",
    "Rainbow Seeker", "beam", "Aprix", "Rodney", "absurd", "Tiny", "MousE", "Winterfell",
    "Morph", "Lee", "Shayde", "sarger", "FieryFire", "Flew", "Groan", "kesser", "100",
    "Paradise", "Scuzzy Sureshot", "Shaw", "Peru", "Cape", "Skatarius", "menelvagor", "Stayon",
    "Markmru", "clefairy27", "HellzNo!", "Kangal", "okyo", "JAMAL", "Temujin", "PH", "Rabbit!",
    "Kado", "Pressure", "Brunson", "Public Assassin", "booker007", "Shaun", "ibex", "ABo",
    "InFaMouS", "apt", "Telemanus", "Violence", "Jessup", "RaCka", "JURASSIC", "Ekko",
    "Iron Survivor", "Hulk", "Spirit", "Rasaq", "Vehicle", "Jack", "Zeebu", "X-Demo", "Cyris",
    "i.d.", "Source", "The Boogieman", "Revolution", "Money", "Glyde", "Omega Red", "lockdown",
    "Flying Bass", "Zidane", "Heafin", "Sword", "Cripple", "yeh", "WillBy", "Spawnisen", "Dad",
    "Warthog", "RENZI", "Ogron", "jabra", "Zizzo", "dare", "Ra", "rabbit", "Liz", "JuNkA",
    "Honcho", "delos", "Invincible", "Gho$tFace-", "Dreamwin", "banzi", "Havok", "Zizu",
    "maketso", "autopilot", "Christian10", "mvp", "Frozen Throne", "Joeses", "ZapaTa",
    "Captain Lonestar", "Reaver", "Paky Dude", "Ardour", "Oderus Urungus", "Charas",
    "Kuukunen", "Coupe", "Celly", "NiGhToWL", "y0gi",
];

/// The map rotation. Each map except the neutral one favors a role by +15%.
pub static MAPS: Lazy<Vec<GameMap>> = Lazy::new(|| {
    vec![
        GameMap::new("Training Grounds", "Standard", None),
        GameMap::new("Neon Slums", "CQC", Some(Role::Rusher)),
        GameMap::new("Iron Heights", "Long Range", Some(Role::Sniper)),
        GameMap::new("Bio-Lab 4", "Technical", Some(Role::Support)),
        GameMap::new("Void Station", "Flank Heavy", Some(Role::Flanker)),
        GameMap::new("Bunker Zero", "Defensive", Some(Role::Anchor)),
    ]
});

/// Hiring cost for Bronze/Silver/Gold candidates.
pub const STAFF_HIRE_COSTS: [i64; 3] = [10, 25, 50];

/// Promotion cost to reach Silver, Gold and Prismatic respectively.
pub const STAFF_PROMOTION_COSTS: [i64; 3] = [25, 50, 100];

/// Severance refund by tier (Bronze through Prismatic).
pub const STAFF_RELEASE_REFUNDS: [i64; 4] = [5, 12, 25, 50];

/// Effect magnitude for a staff role at a given tier.
///
/// Head Coach, Strategist and Community Manager bonuses are multipliers;
/// Recruiter and Accountant bonuses are fractional discounts.
pub fn staff_bonus(role: StaffRole, tier: StaffTier) -> f64 {
    use StaffRole::*;
    use StaffTier::*;
    match (role, tier) {
        (HeadCoach, Bronze) => 1.02,
        (HeadCoach, Silver) => 1.05,
        (HeadCoach, Gold) => 1.10,
        (HeadCoach, Prismatic) => 1.15,
        (Recruiter, Bronze) => 0.05,
        (Recruiter, Silver) => 0.10,
        (Recruiter, Gold) => 0.20,
        (Recruiter, Prismatic) => 0.35,
        (Strategist, Bronze) => 1.15,
        (Strategist, Silver) => 1.20,
        (Strategist, Gold) => 1.25,
        (Strategist, Prismatic) => 1.35,
        (Accountant, Bronze) => 0.05,
        (Accountant, Silver) => 0.10,
        (Accountant, Gold) => 0.15,
        (Accountant, Prismatic) => 0.25,
        (CommunityManager, Bronze) => 1.10,
        (CommunityManager, Silver) => 1.25,
        (CommunityManager, Gold) => 1.50,
        (CommunityManager, Prismatic) => 2.00,
    }
}
