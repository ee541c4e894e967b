/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Upper bound for `max_deviation_bps`; 10_000 bps disables the bound in
/// practice (any positive price within `MAX_PRICE` passes).
pub const MAX_DEVIATION_BPS_LIMIT: u16 = 10_000;

/// Largest accepted price magnitude.
///
/// The cap keeps the U256 cumulative integral overflow-free by construction:
/// the integral is bounded by `MAX_PRICE * i64::MAX < 2^(96 + 63) = 2^159`,
/// far inside 256 bits. With 18-decimal fixed-point prices this still leaves
/// ~7.9e10 whole units of headroom.
pub const MAX_PRICE: u128 = 1 << 96;

/// Hard ceiling for any TWAP window and for the retention window (one year).
pub const MAX_TWAP_WINDOW: u64 = 31_536_000;

/// Default TWAP window when the caller does not pick one: one hour.
pub const DEFAULT_TWAP_WINDOW: u64 = 3_600;

/// Default retention window for observations: seven days.
pub const DEFAULT_MAX_WINDOW: u64 = 604_800;

/// Default per-update deviation bound: 10%.
pub const DEFAULT_MAX_DEVIATION_BPS: u16 = 1_000;
