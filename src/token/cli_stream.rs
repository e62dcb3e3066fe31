use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::tokenizer::open_depth;


/// Iterator over complete inputs typed at a terminal.
///
/// Lines are accumulated until every opened expression and string literal is
/// closed, and the accumulated text is yielded as one item. ^C cancels a
/// partial input, ^D ends the stream.
pub struct CliStream {
    editor: Editor<()>,
    prompt: String,

    curr_expr: String,
}

impl CliStream {
    pub fn new<S: Into<String>>(prompt: S) -> CliStream {
        CliStream {
            editor: Editor::<()>::new(),
            prompt: prompt.into(),

            curr_expr: String::default(),
        }
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new("> ")
    }
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let depth = open_depth(&self.curr_expr);
            let line = if self.curr_expr.is_empty() {
                self.editor.readline(&self.prompt)
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(depth.max(1))))
            };

            match line {
                Ok(line) => {
                    if !self.curr_expr.is_empty() {
                        self.curr_expr.push('\n');
                    }
                    self.curr_expr += &line;
                    if self.curr_expr.trim().is_empty() {
                        self.curr_expr.clear();
                        continue;
                    }
                    if open_depth(&self.curr_expr) == 0 {
                        let input = std::mem::take(&mut self.curr_expr);
                        self.editor.add_history_entry(input.as_str());
                        return Some(input);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Enable ^C to cancel an expression mid-input.
                    if !self.curr_expr.is_empty() {
                        debug!("dropping partial input {:?}", self.curr_expr);
                        self.curr_expr.clear();
                    }
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.curr_expr.clear();
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.curr_expr.clear();
                    continue;
                }
            }
        }
    }
}
