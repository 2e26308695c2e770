//! Interactive menu over the in-memory user repository.
//!
//! # Responsibility
//! - Drive every repository operation from a numbered menu.
//! - Keep the loop scriptable: all input and output flow through the
//!   injected reader and writer handles.
//!
//! # Invariants
//! - Recoverable input mistakes re-prompt instead of aborting.
//! - End of input ends the loop exactly like choice 0.

use log::{info, warn};
use shoebox_core::{
    add_integers, core_version, default_log_level, init_logging, write_keys, MemoryRepository,
    Repository, User,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn main() -> io::Result<()> {
    if let Ok(log_dir) = std::env::var("SHOEBOX_LOG_DIR") {
        let level =
            std::env::var("SHOEBOX_LOG").unwrap_or_else(|_| default_log_level().to_string());
        if let Err(message) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {message}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repo = MemoryRepository::new();
    run(&mut stdin.lock(), &mut stdout.lock(), &mut repo)
}

/// Runs the menu loop until choice 0 or end of input.
fn run<R, W, S>(input: &mut R, out: &mut W, repo: &mut S) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    S: Repository<User>,
{
    info!("event=session_start module=cli status=ok");
    writeln!(out, "shoebox {}", core_version())?;

    loop {
        write_menu(out)?;
        let Some(line) = read_line(input)? else {
            break;
        };

        match line.parse::<u32>() {
            Ok(1) => {
                let Some(user) = prompt_user(input, out)? else {
                    break;
                };
                let stored = repo.save(user);
                writeln!(out, "saved: {stored}")?;
            }
            Ok(2) => {
                let pair = vec![User::new(1, "Alice", 22), User::new(2, "Bob", 25)];
                match repo.save_batch(2, pair) {
                    Ok(_) => writeln!(out, "batch saved.")?,
                    Err(err) => writeln!(out, "batch failed: {err}")?,
                }
            }
            Ok(3) => {
                repo.save_all(&[User::new(3, "Charlie", 26), User::new(4, "Diana", 27)]);
                writeln!(out, "save_all executed.")?;
            }
            Ok(4) => {
                for user in repo.find_all() {
                    writeln!(out, "{user}")?;
                }
            }
            Ok(5) => {
                let Some(id) = prompt_number::<u32, _, _>(input, out, "id")? else {
                    break;
                };
                match repo.find(|user| user.id == id) {
                    Some(user) => writeln!(out, "{user}")?,
                    None => writeln!(out, "user not found")?,
                }
            }
            Ok(6) => {
                let Some(user) = prompt_user(input, out)? else {
                    break;
                };
                let key = user.id;
                match repo.update(&key, user) {
                    Ok(updated) => writeln!(out, "updated: {updated}")?,
                    Err(err) => {
                        warn!("event=update module=cli status=error id={key} reason={err}");
                        writeln!(out, "update failed: {err}")?;
                    }
                }
            }
            Ok(7) => {
                let Some(user) = prompt_user(input, out)? else {
                    break;
                };
                if repo.delete(&user) {
                    writeln!(out, "deleted.")?;
                } else {
                    writeln!(out, "no matching user.")?;
                }
            }
            Ok(8) => {
                write_keys(&repo.find_all(), out)?;
            }
            Ok(9) => {
                let mut numbers: Vec<i64> = Vec::new();
                add_integers(&mut numbers);
                writeln!(out, "numbers after fill:")?;
                for number in &numbers {
                    writeln!(out, "{number}")?;
                }
            }
            Ok(10) => {
                writeln!(out, "total records: {}", repo.count())?;
            }
            Ok(0) => break,
            _ => writeln!(out, "invalid option")?,
        }
    }

    info!("event=session_end module=cli status=ok records={}", repo.count());
    writeln!(out, "finished.")?;
    out.flush()
}

fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "==== shoebox demo ====")?;
    writeln!(out, " 1 - save one user")?;
    writeln!(out, " 2 - save a sized batch")?;
    writeln!(out, " 3 - save several users")?;
    writeln!(out, " 4 - list all users")?;
    writeln!(out, " 5 - find a user by id")?;
    writeln!(out, " 6 - update a user by id")?;
    writeln!(out, " 7 - delete a user")?;
    writeln!(out, " 8 - print stored keys")?;
    writeln!(out, " 9 - fill a numeric list")?;
    writeln!(out, "10 - count users")?;
    writeln!(out, " 0 - exit")?;
    write!(out, "choose: ")?;
    out.flush()
}

/// Reads one trimmed line; `None` means the input is exhausted.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_number<T, R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(out, "{label}: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "not a number: {line}")?,
        }
    }
}

fn prompt_text<R, W>(input: &mut R, out: &mut W, label: &str) -> io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{label}: ")?;
    out.flush()?;
    read_line(input)
}

fn prompt_user<R, W>(input: &mut R, out: &mut W) -> io::Result<Option<User>>
where
    R: BufRead,
    W: Write,
{
    let Some(id) = prompt_number::<u32, _, _>(input, out, "id")? else {
        return Ok(None);
    };
    let Some(name) = prompt_text(input, out, "name")? else {
        return Ok(None);
    };
    let Some(age) = prompt_number::<u8, _, _>(input, out, "age")? else {
        return Ok(None);
    };
    Ok(Some(User::new(id, name, age)))
}
