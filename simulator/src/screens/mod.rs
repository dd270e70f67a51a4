//! Full-screen sequences and pages owned by the simulator binary.

mod boot;
mod diagnostics;

pub use boot::run_boot_screen;
pub use diagnostics::draw_diagnostics_page;
