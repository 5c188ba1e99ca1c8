// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_summary_content(sections: usize) -> String {
    let mut content = String::from("# BOOK SUMMARY: Benchmark Book - Some Author\n\n");

    for section in 0..sections {
        content.push_str(&format!("## Section {section}\n\n"));
        content.push_str("### Key Idea\n\n");
        content.push_str("Some paragraph content with **several** sentences. It wraps over\n");
        content.push_str("more than one source line to exercise accumulation.\n\n");
        content.push_str("> \"A memorable quote from the chapter.\"\n\n");
        content.push_str("* **Key takeaways:**\n");
        for i in 0..3 {
            content.push_str(&format!("    * Takeaway {i} with **bold** words\n"));
        }
        content.push_str("Closing remarks after the list.\n\n");
    }

    content
}
