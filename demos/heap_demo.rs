//! Demonstration driver for the linked binary-tree heap
//!
//! Builds a max-first heap of integers, printing the tree after every
//! mutation so the restructuring (and the leftward skew) can be watched as it
//! happens. Run with `cargo run --example heap_demo`.

use linked_binary_heap::heuristic::MaxFirst;
use linked_binary_heap::linked_binary::LinkedBinaryHeap;
use linked_binary_heap::Heap;

fn main() {
    let mut heap: LinkedBinaryHeap<i64, MaxFirst> = LinkedBinaryHeap::new();
    heap.print_in_order();
    println!("created heap\n");

    for value in [5, 55, 13, -9, 0] {
        heap.push(value);
        heap.print_in_order();
        println!("added {value}\n");
    }

    heap.remove(&55);
    heap.print_in_order();
    println!("removed 55\n");

    // Two extra pops past empty show the explicit empty-heap signal.
    for _ in 0..6 {
        let popped = heap.pop();
        heap.print_in_order();
        match popped {
            Some(value) => println!("popped {value}\n"),
            None => println!("popped nothing\n"),
        }
    }

    for value in [82, 99, -33, -55, -2, 0] {
        heap.push(value);
        heap.print_in_order();
        println!("added {value}\n");
    }
}
