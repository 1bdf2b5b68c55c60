// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_chat_content(messages: usize) -> String {
    let base = "hey, did you see `cargo build --release` finish? &quot;yes&quot; \\*finally\\*\n\
                check ![screenshot] and [the thread] &amp; reply  \n\
                numbers: &#35;42 &#x1F600; ``a ` b`` done!\n\n";
    base.repeat(messages)
}

#[allow(dead_code)]
pub fn generate_unclosed_backticks(runs: usize) -> String {
    let mut content = String::new();
    for i in 0..runs {
        content.push_str(&"`".repeat(i % 7 + 1));
        content.push_str(" word ");
    }
    content
}
