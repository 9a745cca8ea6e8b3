//! Plain-text descriptor cards for terminal output.

use dszoo_core::Descriptor;

/// One card per descriptor: heading, description, blank separator.
pub fn cards(descriptors: &[&Descriptor]) -> String {
    let mut out = String::new();
    for descriptor in descriptors {
        out.push_str(&descriptor.display_name());
        out.push('\n');
        if !descriptor.description.is_empty() {
            out.push_str("  ");
            out.push_str(&descriptor.description);
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
