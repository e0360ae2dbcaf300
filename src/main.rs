// ============================================================
// File: main.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Midterm/Final Project
// Date: Sept 19, 2025 - Updated Nov. 9, 2025
//
// Description:
//   Entry point for the B+ tree index program.
//
//   This executable initializes an in-memory session wrapping a
//   single B+ tree, optionally sized by a branching order passed as
//   the first command-line argument, then enters an interactive REPL
//   loop.
//
//   The program communicates exclusively through standard input
//   and output to support automated black-box testing. There is no
//   persisted state: every run starts from an empty tree.
// =====================================================================
use std::process::ExitCode;

use bplustree::{repl_loop, Session};

/// Entry point for the B+ tree assignment.
fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let mut session = match args.next() {
        None => Session::new(),
        Some(raw_order) => match raw_order.parse::<usize>() {
            Ok(order) => Session::with_order(order),
            Err(_) => {
                eprintln!("ERR: order must be a positive integer, got '{raw_order}'");
                return ExitCode::FAILURE;
            }
        },
    };

    repl_loop(&mut session);
    ExitCode::SUCCESS
}
