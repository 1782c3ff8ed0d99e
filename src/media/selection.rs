//! Item selection between preview and download.

use crate::error::{Error, Result};

/// Selected item positions, in the order the user selected them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    len: usize,
    order: Vec<usize>,
}

/// A parsed selection prompt entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Keep the current selection and start downloading.
    Confirm,
    /// Stop without downloading.
    Abort,
    All,
    None,
    /// Replace the selection with these positions, in this order.
    Only(Vec<usize>),
    /// Flip these positions.
    Toggle(Vec<usize>),
}

impl Selection {
    /// Every item starts out selected.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            order: (0..len).collect(),
        }
    }

    pub fn select_all(&mut self) {
        self.order = (0..self.len).collect();
    }

    pub fn deselect_all(&mut self) {
        self.order.clear();
    }

    /// Flip one position. Newly selected positions go to the end of the order.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        if let Some(pos) = self.order.iter().position(|&i| i == index) {
            self.order.remove(pos);
        } else {
            self.order.push(index);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.order.contains(&index)
    }

    /// Selected positions in selection order.
    pub fn selected(&self) -> &[usize] {
        &self.order
    }

    pub fn count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Apply a prompt command. Confirm and Abort leave the selection unchanged.
    pub fn apply(&mut self, command: &Command) {
        match command {
            Command::Confirm | Command::Abort => {}
            Command::All => self.select_all(),
            Command::None => self.deselect_all(),
            Command::Only(indices) => {
                self.order.clear();
                for &index in indices {
                    if index < self.len && !self.order.contains(&index) {
                        self.order.push(index);
                    }
                }
            }
            Command::Toggle(indices) => {
                for &index in indices {
                    self.toggle(index);
                }
            }
        }
    }

    /// Pick the selected entries out of `items`, in selection order.
    pub fn pick<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.order.iter().filter_map(|&i| items.get(i)).collect()
    }
}

/// Parse one line of selection input.
///
/// Positions are 1-based as displayed: `1,3-5` selects exactly those,
/// `!2` toggles, `all`/`none` are bulk controls, an empty line confirms and
/// `q` aborts.
pub fn parse_command(input: &str, len: usize) -> Result<Command> {
    let input = input.trim();

    match input.to_lowercase().as_str() {
        "" | "y" | "yes" | "ok" => return Ok(Command::Confirm),
        "q" | "quit" | "exit" => return Ok(Command::Abort),
        "a" | "all" => return Ok(Command::All),
        "n" | "none" => return Ok(Command::None),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix('!') {
        return Ok(Command::Toggle(parse_positions(rest, len)?));
    }

    Ok(Command::Only(parse_positions(input, len)?))
}

/// Parse `1,3-5 7` into zero-based positions.
fn parse_positions(input: &str, len: usize) -> Result<Vec<usize>> {
    let mut positions = Vec::new();

    for part in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
    {
        let (start, end) = match part.split_once('-') {
            Some((a, b)) => (parse_position(a, len)?, parse_position(b, len)?),
            None => {
                let n = parse_position(part, len)?;
                (n, n)
            }
        };

        if start > end {
            return Err(Error::Selection(format!("range '{}' is reversed", part)));
        }
        positions.extend((start..=end).map(|n| n - 1));
    }

    if positions.is_empty() {
        return Err(Error::Selection("no item numbers given".to_string()));
    }

    Ok(positions)
}

fn parse_position(value: &str, len: usize) -> Result<usize> {
    let n: usize = value
        .trim()
        .parse()
        .map_err(|_| Error::Selection(format!("'{}' is not an item number", value)))?;

    if n == 0 || n > len {
        return Err(Error::Selection(format!(
            "item {} is out of range (1-{})",
            n, len
        )));
    }

    Ok(n)
}
