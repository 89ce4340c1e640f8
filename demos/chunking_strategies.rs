//! Chunking Strategies Comparison
//!
//! Runs all four strategies over the same document and prints each
//! fragment with its offsets, followed by the size statistics.
//!
//! ```bash
//! cargo run --example chunking_strategies
//! cargo run --example chunking_strategies -- 15   # overlap percent
//! ```

use chunkdeck::{compute_stats, ChunkingConfig, Strategy};

fn main() {
    let overlap_percent: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0);

    println!("Text Chunking Strategies");
    println!("========================\n");

    // Sample document with varied structure
    let document = r"Machine learning models learn patterns from data. They generalize these patterns to make predictions on new, unseen examples. This is fundamentally different from traditional programming, where humans write explicit rules.

The training process involves three key steps.

Forward pass: input flows through the network, producing predictions. Loss computation: predictions are compared against ground truth. Backpropagation: gradients flow backward, updating weights.

Deep learning extends this with multiple hidden layers. Each layer learns increasingly abstract representations. Early layers detect edges; later layers recognize objects.";

    println!("Document length: {} characters", document.chars().count());
    println!("Overlap: {overlap_percent}%\n");

    for (n, strategy) in Strategy::ALL.into_iter().enumerate() {
        let config = ChunkingConfig::new(strategy, 200, overlap_percent);
        if let Err(err) = config.validate() {
            eprintln!("invalid configuration: {err}");
            return;
        }

        let fragments = config.chunk(document);
        let stats = compute_stats(&fragments, overlap_percent);

        let title = format!("{}. {strategy}", n + 1);
        println!("{title}");
        println!("{}", "-".repeat(title.len()));
        println!(
            "   Chunks: {}  avg {}  min {}  max {}  (overlap {} chars)\n",
            stats.chunk_count,
            stats.avg_size,
            stats.min_size,
            stats.max_size,
            config.overlap_chars()
        );

        for (i, fragment) in fragments.iter().enumerate() {
            let preview = fragment.text.chars().take(60).collect::<String>();
            println!(
                "   [{}] bytes {}-{} ({} chars): \"{}...\"",
                i,
                fragment.start,
                fragment.end,
                fragment.char_len(),
                preview.replace('\n', " ")
            );
        }
        println!();
    }

    println!("--- Summary ---\n");
    println!("| Strategy    | Preserves Boundaries | Best For            |");
    println!("|-------------|----------------------|---------------------|");
    println!("| fixed       | No                   | Logs, baseline      |");
    println!("| sentence    | Yes (linguistic)     | Prose, Q&A          |");
    println!("| paragraph   | Yes (structural)     | Articles, notes     |");
    println!("| recursive   | Yes (both)           | Mixed content       |");
}
