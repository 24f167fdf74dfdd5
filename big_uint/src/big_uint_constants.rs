/// Base of the digit representation. Two digits multiply within a `u64`,
/// and every digit prints as exactly [`RADIX_WIDTH`] decimal characters.
pub const RADIX: u32 = 1_000_000_000;

/// Decimal characters per digit.
pub const RADIX_WIDTH: usize = 9;

/// Base of the sub-digits fed to the spectral multiplier. `RADIX == SUB_RADIX^3`.
pub const SUB_RADIX: u64 = 1000;

/// Sub-digits per digit.
pub const SUB_DIGITS_PER_DIGIT: usize = 3;

/// Schoolbook multiplication is replaced by the spectral one only when its
/// estimated cost is at least this many times the spectral estimate.
/// Tuned empirically; must stay >= 1 so that small operands stay on schoolbook.
pub const SPECTRAL_CROSSOVER: u64 = 15;

/// Constant factor of the spectral cost estimate `factor * n * log2(n)`.
pub const SPECTRAL_COST_FACTOR: u64 = 3;

/// Environment variable overriding [`SPECTRAL_CROSSOVER`] for the whole process.
pub const SPECTRAL_CROSSOVER_ENV: &str = "BIG_UINT_SPECTRAL_CROSSOVER";
