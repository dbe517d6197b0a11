//! The scripted exercise sequence.
//!
//! Walks the device through every portal command in a fixed order, pacing
//! the steps so the hardware animations are visible, and reports each
//! acknowledgement once. A missing or malformed response fails that step
//! only; the sequence always runs to the end unless the transport itself
//! faults.

use std::io::{Read, Write};
use std::thread;
use std::time::Duration;

use portal_client::{LinkError, PortalClient};
use portal_proto::{Command, Frame, Response, mapping};

/// True when the reply frame carries the expected response code.
fn is_response(reply: Option<Frame>, expected: Response) -> bool {
    reply.is_some_and(|frame| frame.command == u8::from(expected))
}

/// Run the full exercise sequence against an open link.
pub fn run<T: Read + Write>(client: &mut PortalClient<T>) -> Result<(), LinkError> {
    // Give the device time to finish booting after the port opens.
    thread::sleep(Duration::from_secs(2));

    println!("\n=== Test 1: PING ===");
    let reply = client.request(Command::Ping, 0)?;
    if is_response(reply, Response::Pong) {
        println!("✓ PING/PONG successful");
    } else {
        println!("✗ PING failed - no valid response");
    }

    println!("\n=== Test 2: SET_PROGRAM ===");
    // SPIRAL, PULSE, WAVE, IDLE
    for program in [0, 1, 2, 5] {
        client.send(Command::SetProgram, program)?;
        thread::sleep(Duration::from_millis(100));
        let reply = client.read_response()?;
        if is_response(reply, Response::Ack) {
            println!("✓ Program {program} set successfully");
        } else {
            println!("✗ Program {program} failed");
        }
        // Let the animation run briefly
        thread::sleep(Duration::from_secs(1));
    }

    println!("\n=== Test 3: SET_BPM ===");
    for value in [85, 127, 170, 200] {
        client.send(Command::SetBpm, value)?;
        thread::sleep(Duration::from_millis(100));
        let reply = client.read_response()?;
        if is_response(reply, Response::Ack) {
            println!("✓ BPM set to {value} (≈{:.1} BPM)", mapping::bpm(value));
        } else {
            println!("✗ BPM {value} failed");
        }
    }

    println!("\n=== Test 4: TRIGGER_FLASH ===");
    for _ in 0..3 {
        client.send(Command::TriggerFlash, 0)?;
        thread::sleep(Duration::from_millis(500));
    }
    println!("✓ Flash effects triggered");

    println!("\n=== Test 5: TRIGGER_RIPPLE ===");
    for position in [0, 64, 127, 191, 255] {
        client.send(Command::TriggerRipple, position)?;
        thread::sleep(Duration::from_millis(300));
    }
    println!("✓ Ripple effects triggered at various positions");

    println!("\n=== Test 6: SET_INTENSITY & SET_HUE ===");
    for intensity in [64, 127, 191, 255, 127] {
        client.send(Command::SetIntensity, intensity)?;
        thread::sleep(Duration::from_millis(200));
    }
    for hue in [0, 51, 102, 153, 204, 255] {
        client.send(Command::SetHue, hue)?;
        thread::sleep(Duration::from_millis(300));
    }
    println!("✓ Intensity and hue sweep completed");

    println!("\n=== Test 7: RESET ===");
    let reply = client.request(Command::Reset, 0)?;
    if is_response(reply, Response::Ack) {
        println!("✓ Reset successful - portal returned to default state");
    } else {
        println!("✗ Reset failed");
    }

    println!("\n=== All tests completed ===");
    Ok(())
}
