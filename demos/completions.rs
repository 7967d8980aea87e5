use std::iter::FromIterator;
use terning::tst::TstString;

fn main() {
    // A small command dictionary, deliberately supplied in sorted order;
    // the constructor shuffles before inserting.
    let commands = [
        "cargo", "cat", "cd", "chmod", "chown", "clear", "cp", "curl", "cut", "date", "dd", "df",
        "diff", "dig", "du", "echo", "env", "exit", "export", "find", "grep", "head", "history",
        "kill", "less", "ln", "ls", "man", "mkdir", "mv", "ps", "pwd", "rm", "rmdir", "sed",
        "sort", "tail", "tar", "top", "touch", "uniq", "wc", "which",
    ];

    let tst: TstString<usize> = TstString::balanced(commands.iter().map(|c| c.chars()));

    // Everything beginning with "c", in ascending order
    println!("completions of \"c\":");
    for completion in tst.completions::<_, String>("c".chars()) {
        println!("  {completion}");
    }

    // The first three only
    println!("completions of \"c\" (capped at 3):");
    for completion in tst.completions_capped::<_, String>("c".chars(), 3) {
        println!("  {completion}");
    }

    // Iteration walks the whole dictionary in the same order
    println!("full dictionary:");
    for pair in tst.iter() {
        println!("  {}", String::from_iter(pair.key));
    }
}
