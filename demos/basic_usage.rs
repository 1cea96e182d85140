// ============================================================================
// Basic Usage Example
// ============================================================================

use fixedpt::prelude::*;
use rust_decimal::Decimal;

type Q = FixedI32<8>;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Fixed-Point Example ===\n");

    let spec = FormatSpec::of::<Q>();
    println!("Format: {}", spec);
    println!("  resolution: {}", spec.resolution());
    println!("  range:      {} .. {}\n", spec.min_value(), spec.max_value());

    // Constants are evaluated at compile time
    println!("PI   = raw {} (~{})", Q::PI.to_raw(), Q::PI.to_f64());
    println!("E    = raw {} (~{})", Q::E.to_raw(), Q::E.to_f64());
    println!("1.8  = raw {}\n", Q::ONE_POINT_EIGHT.to_raw());

    // Arithmetic
    let radius = Q::from_real(2.5);
    let area = Q::PI * radius * radius;
    println!("Area of r=2.5: {:?}", area);

    let q = Q::from_int(-7) / Q::from_int(2);
    println!("-7 / 2 = {:?}, to_int = {}", q, q.to_int());

    // Opt-in checking
    match Q::MAX.checked_mul(Q::TWO) {
        Ok(v) => println!("MAX * 2 = {:?}", v),
        Err(e) => println!("MAX * 2 rejected: {}", e),
    }
    println!("MAX * 2 wrapping   = {:?}", Q::MAX * Q::TWO);
    println!("MAX * 2 saturating = {:?}\n", Q::MAX.saturating_mul(Q::TWO));

    // Decimal boundary
    let price = Q::from_decimal(Decimal::new(1225, 2)).expect("12.25 is a binary fraction");
    println!("12.25 as decimal round trip: {}", price.to_decimal());
    if let Err(e) = Q::from_decimal(Decimal::new(1, 1)) {
        println!("0.1 rejected: {}", e);
    }

    // Format checks against persisted descriptions
    let persisted = FormatSpec::from_bits(32, 24).expect("valid format");
    if let Err(e) = persisted.ensure_matches::<Q>() {
        println!("\nPersisted data uses a different format: {}", e);
    }
}
