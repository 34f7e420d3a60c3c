//! Minimal request/response loop over an in-process socket pair.
//!
//! One thread plays the device: it answers every Request with a Heartbeat
//! and a Response carrying the sum. The main thread plays the host
//! application.
//!
//! Run with:
//!   cargo run --example loopback

#[cfg(unix)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::net::UnixStream;

    use serlink::frame::{FrameReader, FrameWriter};
    use serlink::message::{Message, Request};

    let (host_side, device_side) = UnixStream::pair()?;

    let device = std::thread::spawn(move || {
        if let Err(err) = unix::run_device(device_side) {
            eprintln!("device stopped: {err}");
        }
    });

    let mut reader = FrameReader::new(host_side.try_clone()?);
    let mut writer = FrameWriter::new(host_side);

    for i in 1..=5 {
        writer.send(&Message::from(Request { a: i, b: i + 1 }))?;
        loop {
            match reader.read_message()? {
                Message::Heartbeat(beat) => eprintln!("heartbeat #{}", beat.count),
                Message::Response(resp) => {
                    eprintln!("{} + {} = {}", resp.a, resp.b, resp.c);
                    break;
                }
                other => eprintln!("unexpected {}", other.name()),
            }
        }
    }

    drop(reader);
    drop(writer);
    device.join().expect("device thread panicked");
    Ok(())
}

#[cfg(unix)]
mod unix {
    use std::os::unix::net::UnixStream;

    use serlink::frame::{FrameError, FrameReader, FrameWriter, Result};
    use serlink::message::{Heartbeat, Message, Response};

    pub fn run_device(stream: UnixStream) -> Result<()> {
        let mut reader = FrameReader::new(stream.try_clone()?);
        let mut writer = FrameWriter::new(stream);
        let mut beats = 0u32;

        loop {
            let msg = match reader.read_message() {
                Ok(msg) => msg,
                Err(FrameError::ConnectionClosed) => return Ok(()),
                Err(err) => return Err(err),
            };
            if let Ok(request) = msg.as_request() {
                beats += 1;
                writer.send(&Message::from(Heartbeat { count: beats }))?;
                writer.send(&Message::from(Response {
                    a: request.a,
                    b: request.b,
                    c: request.a + request.b,
                }))?;
            }
        }
    }
}

#[cfg(not(unix))]
fn main() {
    eprintln!("this example needs a unix socket pair");
}
