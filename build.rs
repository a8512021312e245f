//! Collects Git and build environment metadata so that the binary can report
//! exactly which revision it was built from.

fn main() -> shadow_rs::SdResult<()> {
    shadow_rs::new()
}
