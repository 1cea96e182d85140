// ============================================================================
// Interfaces Module
// Contains the trait shared by every fixed-point width
// ============================================================================

mod fixed_num;

pub use fixed_num::FixedNum;
