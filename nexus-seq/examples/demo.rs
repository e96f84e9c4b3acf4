//! Runs the same operation sequence against all three containers.
//!
//! ```text
//! cargo run -p nexus-seq --example demo
//! RUST_LOG=nexus_seq=trace cargo run -p nexus-seq --example demo
//! ```

use nexus_seq::{DoublyLinkedList, GrowableArray, OutOfRange, Sequence, SinglyLinkedList};
use tracing_subscriber::EnvFilter;

fn run<S>(name: &str, seq: &mut S) -> Result<(), OutOfRange>
where
    S: Sequence<i32> + std::fmt::Display,
{
    println!("{name}:");
    for i in 0..10 {
        seq.push_back(i);
    }
    println!("{seq}");
    println!("Size: {}", seq.len());

    seq.erase(2)?;
    seq.erase(4)?;
    seq.erase(5)?;
    println!("{seq}");
    println!("Size: {}", seq.len());

    seq.insert(0, 10)?;
    seq.insert(4, 20)?;
    seq.push_back(30);
    println!("{seq}");
    println!("Size: {}", seq.len());

    tracing::info!(container = name, len = seq.len(), "demo finished");
    Ok(())
}

fn main() -> Result<(), OutOfRange> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    run("GrowableArray", &mut GrowableArray::<i32>::new())?;
    println!();
    run("DoublyLinkedList", &mut DoublyLinkedList::<i32>::new())?;
    println!();
    run("SinglyLinkedList", &mut SinglyLinkedList::<i32>::new())?;
    Ok(())
}
