use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use anyhow::{Context, Result};
use crate::tune::Tune;

/// What to do with a line that doesn't parse.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OnError {
    Abort,
    Skip,
}

/// Read tunes, one per line, skipping blank lines.
/// `source` names the input in error messages.
pub fn parse_tunes<R: BufRead>(reader: R, source: &str, on_error: OnError) -> Result<Vec<Tune>> {
    let mut tunes = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Couldn't read {}", source))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match line.parse::<Tune>() {
            Ok(tune) => tunes.push(tune),
            Err(err) => match on_error {
                OnError::Abort => {
                    return Err(err).with_context(|| {
                        format!("{}:{}: couldn't parse `{}`", source, i + 1, line)
                    });
                }
                OnError::Skip => {
                    log::warn!("{}:{}: skipping `{}`: {:?}", source, i + 1, line, err);
                }
            }
        }
    }
    Ok(tunes)
}

/// Load tunes from each file in order.
pub fn load_tunes<P: AsRef<Path>>(paths: &[P], on_error: OnError) -> Result<Vec<Tune>> {
    let mut tunes = vec![];
    for path in paths {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Couldn't open {}", path.display()))?;
        let loaded = parse_tunes(BufReader::new(file), &path.display().to_string(), on_error)?;
        log::info!("Loaded {} tunes from {}", loaded.len(), path.display());
        tunes.extend(loaded);
    }
    Ok(tunes)
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_tunes() {
        let input = "C F G\n\n   \nAm D E\r\n  G F C  \n";
        let tunes = parse_tunes(Cursor::new(input), "test", OnError::Abort).unwrap();
        let lines: Vec<String> = tunes.iter().map(|t| t.to_string()).collect();
        assert_eq!(lines, vec!["C F G", "Am D E", "G F C"]);
    }

    #[test]
    fn test_abort_on_invalid_line() {
        let input = "C F G\nC F G7\nAm D E\n";
        let err = parse_tunes(Cursor::new(input), "test", OnError::Abort).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("test:2"), "{}", msg);
        assert!(msg.contains("C F G7"), "{}", msg);
    }

    #[test]
    fn test_skip_invalid_line() {
        let input = "C F G\nC F G7\nH\nAm D E\n";
        let tunes = parse_tunes(Cursor::new(input), "test", OnError::Skip).unwrap();
        assert_eq!(tunes.len(), 2);
        assert_eq!(tunes[1].key, "Am");
    }

    #[test]
    fn test_missing_file() {
        let res = load_tunes(&["/nonexistent/tunes.txt"], OnError::Abort);
        assert!(res.is_err());
    }
}
