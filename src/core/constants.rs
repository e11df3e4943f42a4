// Tick and timing
pub const PLAY_TIME_TICK_SECONDS: u64 = 1;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 2;

// Idle earnings: drops per minute contributed by each upgrade level
pub const IDLE_RATE_PER_COLLECTOR_LEVEL: f64 = 2.0;
pub const IDLE_RATE_PER_SPEED_LEVEL: f64 = 0.5;
pub const IDLE_RATE_PER_RADIUS_LEVEL: f64 = 0.75;
pub const IDLE_RATE_PER_RATE_LEVEL: f64 = 1.0;

// Each owned companion adds +10% to the idle rate; the bonus is additive in
// percentage and applied to the base rate once, not compounded per companion.
pub const IDLE_COMPANION_BONUS: f64 = 0.1;

// Offline time past this earns nothing extra
pub const MAX_OFFLINE_MINUTES: f64 = 24.0 * 60.0;

// Direct-collect companion multiplier (matching currency only)
pub const COMPANION_COLLECT_MULTIPLIER: u64 = 2;

// Upgrade costs: floor(base * growth^level), charged in drops
pub const SPEED_BASE_COST: u64 = 10;
pub const SPEED_COST_GROWTH: f64 = 1.15;
pub const RADIUS_BASE_COST: u64 = 25;
pub const RADIUS_COST_GROWTH: f64 = 1.2;
pub const RATE_BASE_COST: u64 = 50;
pub const RATE_COST_GROWTH: f64 = 1.25;
pub const COLLECTOR_BASE_COST: u64 = 100;
pub const COLLECTOR_COST_GROWTH: f64 = 1.3;

// One-time purchase costs
pub const FLAG_COST_DROPS: u64 = 1_000;
pub const SWAN_SKIN_COST_DROPS: u64 = 5_000;
pub const SWAN_SKIN_COST_PEARLS: u64 = 10;
pub const FISH_COMPANION_COST_DROPS: u64 = 10_000;
pub const FISH_COMPANION_COST_PEARLS: u64 = 50;
pub const BIRD_COMPANION_COST_DROPS: u64 = 15_000;
pub const BIRD_COMPANION_COST_LEAVES: u64 = 20;

// Prestige: gated on lifetime drops, points = floor(sqrt(lifetime / divisor))
pub const PRESTIGE_UNLOCK_LIFETIME_DROPS: u64 = 50_000;
pub const PRESTIGE_POINT_DIVISOR: f64 = 10_000.0;

// Daily login rewards, indexed by streak day (day 1 through day 7)
pub const DAILY_REWARDS: [u64; 7] = [100, 200, 400, 800, 1_600, 3_200, 10_000];

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x414F_4252_4550_4150; // "PAPERBOA" LE
