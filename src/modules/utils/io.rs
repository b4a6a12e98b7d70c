use std::fmt::Display;
use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

/// Line-oriented console used by every interactive flow
pub struct Console<R, W> {
    reader: R,
    writer: W,
    hide_secrets: bool,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process stdin/stdout
    pub fn stdio() -> Self {
        let stdin = io::stdin();
        let hide_secrets = stdin.is_terminal();
        Self {
            reader: stdin.lock(),
            writer: io::stdout(),
            hide_secrets,
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Console over arbitrary reader/writer; secrets are read as plain lines
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            hide_secrets: false,
        }
    }

    /// Helper function to read a trimmed line, failing with `UnexpectedEof` once input is exhausted
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }
        Ok(input.trim().to_string())
    }

    /// Print a label without a newline and read the answer
    pub fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Same as `prompt`, but without echo when attached to a terminal
    pub fn prompt_secret(&mut self, label: &str) -> io::Result<String> {
        if !self.hide_secrets {
            return self.prompt(label);
        }
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;
        Ok(rpassword::read_password()?.trim().to_string())
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
