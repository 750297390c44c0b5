//! Prints the greeting form with a result filled in.
//! Run with: cargo run --example html_greeting -- Alice 3

use greeter::GreetingRequest;
use greeter_doc_html::{HtmlOptions, Outcome, to_html_with_outcome};

fn main() {
    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "World".to_string());
    let repetitions = args.next().and_then(|n| n.parse().ok()).unwrap_or(1);

    let request = GreetingRequest::new(name, repetitions);
    let outcome = Outcome::from_result(request.respond());
    println!(
        "{}",
        to_html_with_outcome::<GreetingRequest>(HtmlOptions::new(), &outcome)
    );
}
