//! Simple decoder to inspect tnetstring documents.
//!
//! Reads a file (or decodes the literal argument) and prints the value tree
//! of every frame in it.

use std::fs;

use tnetstring::{decode, Value};

fn format_str(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => {
            let preview: String = s.chars().take(80).collect();
            if s.chars().count() > 80 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Err(_) => format!("BYTES[{}]", bytes.len()),
    }
}

fn print_value(v: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match v {
        Value::Null => println!("{pad}null"),
        Value::Bool(b) => println!("{pad}{b}"),
        Value::Int(n) => println!("{pad}{n}"),
        Value::Float(f) => println!("{pad}{f:?}"),
        Value::Str(s) => println!("{pad}{}", format_str(s)),
        Value::List(items) => {
            println!("{pad}list[{}]", items.len());
            for item in items {
                print_value(item, indent + 1);
            }
        }
        Value::Dict(dict) => {
            println!("{pad}dict[{}]", dict.len());
            for (key, value) in dict {
                println!("{pad}  {}:", format_str(key));
                print_value(value, indent + 2);
            }
        }
    }
}

fn main() {
    let arg = std::env::args()
        .nth(1)
        .expect("usage: inspect <file-or-literal>");

    // Prefer the file; fall back to treating the argument as wire bytes
    let data = fs::read(&arg).unwrap_or_else(|_| arg.clone().into_bytes());
    println!("Input size: {} bytes", data.len());

    let mut rest = &data[..];
    let mut count = 0usize;
    while !rest.is_empty() {
        let (value, remainder) = decode(rest).expect("failed to decode");
        count += 1;
        println!("\n=== Frame {count} ===");
        print_value(&value, 0);
        rest = remainder;
    }
    println!("\n{count} frame(s) decoded");
}
