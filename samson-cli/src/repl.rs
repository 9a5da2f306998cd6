//! The read-reply loop.
//!
//! ```text
//!
//! Samson:	 Hello! I am Samson. I am a simple chatbot. :)
//!
//! User:	 hi
//!
//! Samson:	 Hello! I am a simple chatbot. :)
//!
//! User:	 ^D
//! ```

use std::io::{self, BufRead, Write};

use rand::Rng;
use samson_core::session::ChatSession;
use tracing::warn;

/// Greet, then answer one line at a time until `input` reaches EOF.
///
/// Returns the number of turns answered.
///
/// # Errors
///
/// Returns any I/O error from `input` or `output`. A memory invariant
/// violation during a reply is reported as [`io::ErrorKind::Other`].
pub fn run<R, I, O>(session: &mut ChatSession<R>, mut input: I, output: &mut O) -> io::Result<u64>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let bot = session.chat_config().bot_name.clone();
    let user = session.chat_config().user_label.clone();

    let greeting = session.greet();
    write!(output, "\n{bot}:\t {greeting}\n\n")?;

    let mut line = String::new();
    let mut turns = 0;
    loop {
        write!(output, "{user}:\t ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            output.flush()?;
            return Ok(turns);
        }
        let message = line.trim_end_matches(['\n', '\r']);

        let reply = session.respond(message).map_err(|e| {
            warn!(error = %e, "Reply walk failed");
            io::Error::other(e)
        })?;
        turns += 1;

        write!(output, "\n{bot}:\t")?;
        for token in &reply.tokens {
            write!(output, " {token}")?;
        }
        write!(output, "\n\n")?;
    }
}
