use console::style;

/// Destination for human-readable progress lines
pub trait ProgressSink {
    fn emit(&mut self, line: &str);
}

/// Writes progress to stdout, highlighting step and iteration markers
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        if let Some(rest) = line.strip_prefix("✓ ") {
            println!("{} {}", style("✓").green(), rest);
        } else if line.starts_with("===") {
            println!("{}", style(line).bold());
        } else {
            println!("{}", line);
        }
    }
}

/// Collects lines in memory
impl ProgressSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn emit(&mut self, line: &str) {
        (**self).emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_twice(mut sink: impl ProgressSink) {
        sink.emit("first");
        sink.emit("second");
    }

    #[test]
    fn test_vec_sink_through_mut_ref() {
        let mut lines: Vec<String> = Vec::new();
        emit_twice(&mut lines);
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }
}
