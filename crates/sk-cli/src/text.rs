//! Line-oriented front end.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use sk_fiction::{GameSession, Response, ResponseKind};

/// Play on stdin/stdout until the game ends or input runs out.
pub fn run(mut session: GameSession) -> Result<(), String> {
    println!("{}\n", session.intro());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        println!("{}", session.status().summary().dimmed());
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let response = session.process_command(&line);
        render(&response);
        if response.game_over {
            break;
        }
    }

    log::info!("session closed");
    Ok(())
}

fn render(response: &Response) {
    match response.kind {
        ResponseKind::Silent => {}
        ResponseKind::Success => println!("{}\n", response.text),
        ResponseKind::Failure => println!("{}\n", response.text.yellow()),
    }
}
