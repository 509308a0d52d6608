// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_outline_content(sections: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!("{}. Section {} scope:\n", section + 1, section));
        content.push_str("The inspector shall observe readily accessible components\n");
        content.push_str("and report material defects.\n\n");
        for item in ["A", "B", "C"] {
            content.push_str(&format!("{item}. component {item} of section {section};\n"));
        }
        content.push_str("- bullet note\n");
        content.push_str("loose item one;\nloose item two;\n\n");
    }

    content
}
