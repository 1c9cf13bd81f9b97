//! Interactive demo chat loop

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use kotoba::Responder;

/// Run the terminal chat loop until "exit" or EOF.
pub async fn run(responder: &Responder) -> Result<()> {
    let persona = responder.persona();
    let name = if persona.name.is_empty() {
        "Kotoba".to_string()
    } else {
        persona.name.clone()
    };

    println!(
        "{} {} ({})",
        "Chatting with".bold(),
        name.cyan().bold(),
        responder.provider().provider_name()
    );
    if !persona.description.is_empty() {
        println!("{}", persona.description.dimmed());
    }
    println!("{}", "Type 'exit' to quit.".dimmed());

    loop {
        let input: String = match Input::new().with_prompt("you").allow_empty(true).interact_text()
        {
            Ok(line) => line,
            // EOF / closed terminal ends the loop
            Err(_) => break,
        };

        if input.trim().eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = responder.generate_response(&input).await;
        println!("{} {}", format!("{}:", name).cyan().bold(), reply);
    }

    println!("{}", "Bye!".dimmed());
    Ok(())
}
