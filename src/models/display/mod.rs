//! Display model implementations for pretty, table and JSON output

mod bundle;
mod settings;

pub use settings::ResolvedConfig;

/// Placeholder for absent values
pub(crate) const NONE: &str = "--";

/// Format a byte count for humans
pub(crate) fn format_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = KIB * 1024;
    match bytes {
        b if b >= MIB => format!("{:.1} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KiB", b as f64 / KIB as f64),
        b => format!("{} B", b),
    }
}
