//! Damage system - the attack formula and its result shape

mod calculation;
mod input;
mod result;

pub use calculation::{
    apply_critical, calculate, calculate_with_def, calculate_with_details, effective_def,
    is_critical_damage, roll_critical,
};
pub use input::DamageInput;
pub use result::DamageResult;
