//! # bplustree
//! An in-memory B+ tree index built for the midterm project.
//!
//! ## Features
//! - Ordered index over fixed-width byte-string keys with `i64` record values
//! - Point insert, point lookup, point delete, full destroy
//! - Level-order and leaf-chain diagnostic traversals
//! - Command parsing with single-character commands
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which provides the REPL interface. All reusable logic and
//! unit tests live here so the project can be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Midterm/Final Project
// Date: Sept 20, 2025
//
//   This module implements the command-line interface (CLI)
//   that accepts the following single-character commands, each
//   operating on the shared in-memory tree:
//
//     `i <key> <value>` -> Insert a key-value pair
//     `d <key>`         -> Delete a key
//     `f <key>`         -> Find and print a key's value
//     `p <key>`         -> Reserved for future per-node inspection; prints like `f`
//     `l`               -> Print the leaf chain, left to right
//     `t`               -> Print the tree level-order
//     `v`               -> Toggle verbose diagnostic output
//     `x`               -> Destroy and recreate an empty tree
//     `q`               -> Quit
//     `?`               -> Print command help
// =====================================================================
pub mod keycodec;

pub mod index;
pub use index::{BPlusTree, Node, NodeId};

pub mod session;
pub use session::Session;

use std::io::{self, BufRead};

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
pub enum CommandResult {
    Continue,
    Exit,
}

const HELP_TEXT: &str = "\
Commands:
  i <key> <value>   insert key with value
  d <key>           delete key
  f <key>           find key and print its value
  p <key>           reserved; currently prints like f
  l                 print the leaf chain
  t                 print the tree level-order
  v                 toggle verbose output
  x                 destroy and recreate an empty tree
  q                 quit
  ?                 print this help";

/// Read–Evaluate–Print Loop (REPL) to handle interactive command input.
///
/// Continuously reads user commands from standard input, executes them
/// against the current [`Session`]'s tree, and prints responses back to
/// standard output.
///
/// # Example
/// ```no_run
/// use bplustree::{Session, repl_loop};
///
/// let mut session = Session::new();
/// repl_loop(&mut session); // <- waits for user input interactively
/// ```
pub fn repl_loop(session: &mut Session) {
    let stdin = io::stdin();
    let proper_syntax = "Syntax Usage: i <key> <value>, d <key>, f <key>, l, t, v, x, q, ?";

    for input_line in stdin.lock().lines() {
        let full_command = input_line.unwrap();
        let (cmd, args) = parse_command(&full_command);

        match handle_command(&cmd, &args, proper_syntax, session) {
            CommandResult::Exit => break,
            CommandResult::Continue => (),
        }
    }
}

/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command, and the remaining tokens
/// are collected as arguments. Leading and trailing whitespace is
/// ignored.
fn parse_command(line: &str) -> (String, Vec<String>) {
    let trimmed_line = line.trim();
    let mut command_segments = trimmed_line.split_whitespace();
    let cmd = command_segments.next().unwrap_or("").to_string();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();
    (cmd, args)
}

/// Parses a single decimal integer argument, printing an error and
/// returning `None` on failure.
fn parse_int_arg(raw: &str, label: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            println!("ERR: {label} must be an integer");
            None
        }
    }
}

/// Handles a single user command and returns whether the REPL should
/// continue or exit.
///
/// - Only supported commands will operate - any other input prints an
///   error and redisplays the syntax.
///
/// Returns:
/// - `CommandResult::Continue` if the loop should keep running.
/// - `CommandResult::Exit` if the user requested termination.
///
/// The `proper_syntax` argument is displayed in error messages to guide
/// the user.
fn handle_command(cmd: &str, args: &[String], proper_syntax: &str, session: &mut Session) -> CommandResult {
    match cmd {
        "i" => {
            if args.len() != 2 {
                println!("ERR i requires exactly two arguments <key> <value>");
                return CommandResult::Continue;
            }
            let (Some(key), Some(value)) = (parse_int_arg(&args[0], "key"), parse_int_arg(&args[1], "value")) else {
                return CommandResult::Continue;
            };
            session.tree.insert_int(key, value);
            println!("OK");
            CommandResult::Continue
        }

        "d" => {
            if args.len() != 1 {
                println!("ERR d requires exactly one argument <key>");
                return CommandResult::Continue;
            }
            let Some(key) = parse_int_arg(&args[0], "key") else {
                return CommandResult::Continue;
            };
            session.tree.delete_int(key);
            println!("OK");
            CommandResult::Continue
        }

        "f" | "p" => {
            if args.len() != 1 {
                println!("ERR {cmd} requires exactly one argument <key>");
                return CommandResult::Continue;
            }
            let Some(key) = parse_int_arg(&args[0], "key") else {
                return CommandResult::Continue;
            };
            session.tree.find_and_print_int(key);
            CommandResult::Continue
        }

        "l" => {
            if !args.is_empty() {
                println!("ERR l does not take any arguments");
                return CommandResult::Continue;
            }
            session.tree.print_leaves();
            CommandResult::Continue
        }

        "t" => {
            if !args.is_empty() {
                println!("ERR t does not take any arguments");
                return CommandResult::Continue;
            }
            session.tree.print_tree();
            CommandResult::Continue
        }

        "v" => {
            if !args.is_empty() {
                println!("ERR v does not take any arguments");
                return CommandResult::Continue;
            }
            session.verbose = !session.verbose;
            session.tree.set_verbose(session.verbose);
            println!("verbose: {}", session.verbose);
            CommandResult::Continue
        }

        "x" => {
            if !args.is_empty() {
                println!("ERR x does not take any arguments");
                return CommandResult::Continue;
            }
            session.reset();
            println!("OK");
            CommandResult::Continue
        }

        "q" => {
            println!("Exiting...");
            CommandResult::Exit
        }

        "?" => {
            println!("{HELP_TEXT}");
            CommandResult::Continue
        }

        "" => {
            println!("Enter a command.");
            CommandResult::Continue
        }

        _ => {
            println!("ERROR: command '{cmd}' not handled");
            println!("{proper_syntax}");
            CommandResult::Continue
        }
    }
}

// =================================================================
// lib.rs Unit tests
// =================================================================
