//! Interactive greeting. Run with: cargo run --example dialoguer_greeting

use greeter::GreetingRequest;
use greeter_wizard_dialoguer::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let backend = DialoguerBackend::new();
    let request = GreetingRequest::builder().run(backend)?;
    println!("{}", request.respond()?);
    Ok(())
}
