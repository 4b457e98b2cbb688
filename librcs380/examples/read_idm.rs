//! Wait for a FeliCa card on an RC-S380 and print its IDm and PMm.
//!
//! cargo run -p librcs380 --example read_idm --features usb
//!
//! Ctrl-C stops polling. RUST_LOG=trace prints every frame.

use anyhow::{Context, Result};
use librcs380::prelude::*;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut transport = UsbTransport::new();
    transport
        .open()
        .context("no RC-S380 reader could be opened")?;
    let (manufacturer, product) = transport.describe()?;
    println!("Manufacturer: {}", manufacturer);
    println!("Product: {}", product);

    // opening again is a no-op, the device keeps the claimed interface
    let device = DeviceBuilder::new()
        .with_transport(Box::new(transport))
        .open()?;
    let mut device = device.initialize().context("reader initialization failed")?;

    let info = device.chipset_info();
    println!("Firmware version: {}", info.firmware);
    println!("PD data version: {}", info.pd_data);

    let token = CancelToken::new();
    let handler_token = token.clone();
    ctrlc::set_handler(move || handler_token.cancel())?;

    println!("Touch a card (Ctrl-C to quit)");
    let mut poller = Poller::new(PollConfig::default()).with_cancel(token);
    match poller.run(&mut device) {
        Ok(card) => {
            println!("IDm: {}", bytes_to_hex_spaced(card.idm().as_bytes()));
            println!("PMm: {}", bytes_to_hex_spaced(card.pmm().as_bytes()));
            if let Some(sc) = card.system_code() {
                println!("System code: {:04x}", sc.as_u16());
            }
        }
        Err(Error::Cancelled) => println!("cancelled"),
        Err(e) => return Err(e.into()),
    }

    device.close()?;
    Ok(())
}
