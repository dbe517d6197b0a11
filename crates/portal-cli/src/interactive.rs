//! The interactive operator console.
//!
//! Reads one command per line, sends the matching frame, and reports what
//! was sent. Invalid input gets a message and the loop continues; only a
//! transport fault (or `quit`) ends the session. Like the original
//! console, frames are fire-and-forget here; responses are not read.

use std::io::{self, BufRead, Read, Write};

use portal_client::{LinkError, PortalClient};
use portal_proto::{Command, mapping};

use crate::commands::{self, ConsoleCommand};

/// Run the console loop until `quit`, end of input, or a link fault.
pub fn run<T: Read + Write>(client: &mut PortalClient<T>) -> Result<(), LinkError> {
    println!("Interactive Portal Control Mode");
    println!("Commands: ping, program <0-9>, bpm <0-255>, flash, ripple <0-255>, quit");

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match commands::parse(&line) {
            ConsoleCommand::Ping => {
                client.send(Command::Ping, 0)?;
                println!("PING sent");
            }
            ConsoleCommand::Program { slot } => {
                client.send(Command::SetProgram, slot)?;
                println!("Program {slot} sent");
            }
            ConsoleCommand::Bpm { value } => {
                client.send(Command::SetBpm, value)?;
                println!("BPM {value} sent (≈{:.1} BPM)", mapping::bpm(value));
            }
            ConsoleCommand::Flash => {
                client.send(Command::TriggerFlash, 0)?;
                println!("Flash triggered");
            }
            ConsoleCommand::Ripple { position } => {
                client.send(Command::TriggerRipple, position)?;
                println!("Ripple triggered at position {position}");
            }
            ConsoleCommand::Quit => break,
            ConsoleCommand::InvalidArgs { error, .. } => println!("{error}"),
            ConsoleCommand::Unknown { .. } => println!("Unknown command"),
        }
    }

    Ok(())
}
