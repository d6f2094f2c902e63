//! Interactive menu loop for the patient roster.
//!
//! Invalid input is always handled with an iterative retry loop, never
//! recursion. The only ways out are the Exit entry and end-of-input; both
//! return to `main` so the process itself decides to terminate.
//!
//! The loop is generic over [`BufRead`] and [`Write`], so every flow can be
//! driven by scripted input in tests.

use std::io::{self, BufRead, Write};

use roster_core::{Patient, PatientDetails, PatientStore, PatientUpdate, StoreError};

/// Printed when the session ends on interrupt or end-of-input.
pub const EXIT_NOTICE: &str = "Exiting patient roster. Goodbye.";

const NOT_FOUND: &str = "Patient not found";

/// Menu entries, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Update,
    Delete,
    Search,
    Exit,
}

impl MenuChoice {
    /// Map a menu answer in `1..=6` to its action.
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Update),
            "4" => Some(Self::Delete),
            "5" => Some(Self::Search),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// What a flow tells the main loop to do next.
enum Outcome {
    Continue,
    Quit,
}

/// Drive the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut PatientStore,
) -> io::Result<()> {
    loop {
        write_menu(output)?;
        let line = match prompt(input, output, "Choice: ")? {
            Some(line) => line,
            None => return finish(output),
        };

        let choice = match MenuChoice::parse(&line) {
            Some(choice) => choice,
            None => {
                writeln!(output, "Please enter a number between 1 and 6.")?;
                continue;
            }
        };

        let outcome = match choice {
            MenuChoice::Add => add_flow(input, output, store)?,
            MenuChoice::List => list_flow(output, store)?,
            MenuChoice::Update => update_flow(input, output, store)?,
            MenuChoice::Delete => delete_flow(input, output, store)?,
            MenuChoice::Search => search_flow(input, output, store)?,
            MenuChoice::Exit => {
                writeln!(output, "Goodbye.")?;
                return Ok(());
            }
        };

        if let Outcome::Quit = outcome {
            return finish(output);
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "Patient Roster")?;
    writeln!(output, "  1) Add a patient")?;
    writeln!(output, "  2) List all patients")?;
    writeln!(output, "  3) Update a patient")?;
    writeln!(output, "  4) Delete a patient")?;
    writeln!(output, "  5) Find a patient by id")?;
    writeln!(output, "  6) Exit")?;
    Ok(())
}

fn finish<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "{EXIT_NOTICE}")?;
    Ok(())
}

/// Read one trimmed line. `None` means input ended.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters a numeric patient id. `None` = input ended.
fn prompt_id<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<u32>> {
    loop {
        let line = match prompt(input, output, "Patient id: ")? {
            Some(line) => line,
            None => return Ok(None),
        };
        match line.parse::<u32>() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => writeln!(output, "Please enter a numeric patient id.")?,
        }
    }
}

fn add_flow<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut PatientStore,
) -> io::Result<Outcome> {
    loop {
        let details = match read_details(input, output)? {
            Some(details) => details,
            None => return Ok(Outcome::Quit),
        };

        match store.add(details) {
            Ok(patient) => {
                writeln!(
                    output,
                    "Added patient {} with id {}.",
                    patient.full_name(),
                    patient.patient_id
                )?;
                return Ok(Outcome::Continue);
            }
            Err(err) => {
                writeln!(output, "Invalid input: {err}. Please re-enter the details.")?;
            }
        }
    }
}

fn read_details<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PatientDetails>> {
    let Some(first_name) = prompt(input, output, "First name: ")? else {
        return Ok(None);
    };
    let Some(last_name) = prompt(input, output, "Last name: ")? else {
        return Ok(None);
    };
    let Some(date_of_birth) = prompt(input, output, "Date of birth (dd-mm-yyyy): ")? else {
        return Ok(None);
    };
    let Some(hometown) = prompt(input, output, "Hometown: ")? else {
        return Ok(None);
    };
    let Some(house_number) = prompt(input, output, "House number: ")? else {
        return Ok(None);
    };
    let Some(phone_number) = prompt(input, output, "Phone number (ddd-ddd-dddd): ")? else {
        return Ok(None);
    };

    Ok(Some(PatientDetails {
        first_name,
        last_name,
        date_of_birth,
        hometown,
        house_number,
        phone_number,
    }))
}

fn list_flow<W: Write>(output: &mut W, store: &PatientStore) -> io::Result<Outcome> {
    if store.is_empty() {
        writeln!(output, "No patients on the roster yet.")?;
    } else {
        writeln!(output, "{} patient(s):", store.len())?;
        for patient in store.patients() {
            render_patient(output, patient)?;
        }
    }
    Ok(Outcome::Continue)
}

fn update_flow<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut PatientStore,
) -> io::Result<Outcome> {
    let Some(id) = prompt_id(input, output)? else {
        return Ok(Outcome::Quit);
    };

    let current = match store.get(id) {
        Ok(patient) => patient.clone(),
        Err(_) => {
            writeln!(output, "{NOT_FOUND}")?;
            return Ok(Outcome::Continue);
        }
    };

    writeln!(
        output,
        "Updating patient {}. Leave a field blank to keep its value.",
        id
    )?;

    loop {
        let update = match read_update(input, output, &current)? {
            Some(update) => update,
            None => return Ok(Outcome::Quit),
        };

        match store.update(id, update) {
            Ok(patient) => {
                writeln!(output, "Updated patient {}.", patient.patient_id)?;
                render_patient(output, &patient)?;
                return Ok(Outcome::Continue);
            }
            Err(StoreError::Validation(err)) => {
                writeln!(output, "Invalid input: {err}. Please re-enter the fields.")?;
            }
            Err(StoreError::NotFound(_)) => {
                writeln!(output, "{NOT_FOUND}")?;
                return Ok(Outcome::Continue);
            }
        }
    }
}

/// Prompt for one optional field. Outer `None` means input ended; inner
/// `None` means the user kept the current value.
fn prompt_optional<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
    current: &str,
) -> io::Result<Option<Option<String>>> {
    match prompt(input, output, &format!("{label} [{current}]: "))? {
        Some(line) if line.is_empty() => Ok(Some(None)),
        Some(line) => Ok(Some(Some(line))),
        None => Ok(None),
    }
}

fn read_update<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    current: &Patient,
) -> io::Result<Option<PatientUpdate>> {
    let Some(first_name) = prompt_optional(input, output, "First name", &current.first_name)?
    else {
        return Ok(None);
    };
    let Some(last_name) = prompt_optional(input, output, "Last name", &current.last_name)? else {
        return Ok(None);
    };
    let Some(date_of_birth) =
        prompt_optional(input, output, "Date of birth", &current.date_of_birth)?
    else {
        return Ok(None);
    };
    let Some(hometown) = prompt_optional(input, output, "Hometown", &current.hometown)? else {
        return Ok(None);
    };
    let Some(house_number) =
        prompt_optional(input, output, "House number", &current.house_number)?
    else {
        return Ok(None);
    };
    let Some(phone_number) =
        prompt_optional(input, output, "Phone number", &current.phone_number)?
    else {
        return Ok(None);
    };

    Ok(Some(PatientUpdate {
        first_name,
        last_name,
        date_of_birth,
        hometown,
        house_number,
        phone_number,
    }))
}

fn delete_flow<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut PatientStore,
) -> io::Result<Outcome> {
    let Some(id) = prompt_id(input, output)? else {
        return Ok(Outcome::Quit);
    };

    match store.delete(id) {
        Ok(patient) => writeln!(
            output,
            "Deleted patient {} (id {}).",
            patient.full_name(),
            patient.patient_id
        )?,
        Err(_) => writeln!(output, "{NOT_FOUND}")?,
    }
    Ok(Outcome::Continue)
}

fn search_flow<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &PatientStore,
) -> io::Result<Outcome> {
    let Some(id) = prompt_id(input, output)? else {
        return Ok(Outcome::Quit);
    };

    match store.get(id) {
        Ok(patient) => render_patient(output, patient)?,
        Err(_) => writeln!(output, "{NOT_FOUND}")?,
    }
    Ok(Outcome::Continue)
}

fn render_patient<W: Write>(output: &mut W, patient: &Patient) -> io::Result<()> {
    writeln!(output, "  #{} {}", patient.patient_id, patient.full_name())?;
    writeln!(
        output,
        "     born {}  phone {}",
        patient.date_of_birth, patient.phone_number
    )?;
    writeln!(
        output,
        "     {}, house no. {}",
        patient.hometown, patient.house_number
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a scripted session against a fresh store, returning the output
    /// and the store's final state.
    fn run_session(script: &str) -> (String, PatientStore) {
        let mut store = PatientStore::new();
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        run(&mut input, &mut output, &mut store).unwrap();
        (String::from_utf8(output).unwrap(), store)
    }

    const ADD_AMA: &str = "1\nAma\nOwusu\n15-06-1990\nAccra\n12\n024-400-0000\n";

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Add));
        assert_eq!(MenuChoice::parse(" 6 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("7"), None);
        assert_eq!(MenuChoice::parse("add"), None);
    }

    #[test]
    fn test_exit_choice_ends_session() {
        let (output, store) = run_session("6\n");
        assert!(output.contains("Goodbye."));
        assert!(store.is_empty());
    }

    #[test]
    fn test_end_of_input_prints_exit_notice() {
        let (output, _) = run_session("");
        assert!(output.contains(EXIT_NOTICE));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (output, _) = run_session("9\n6\n");
        assert!(output.contains("Please enter a number between 1 and 6."));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_add_then_list() {
        let script = format!("{ADD_AMA}2\n6\n");
        let (output, store) = run_session(&script);

        assert!(output.contains("Added patient Ama Owusu with id 1."));
        assert!(output.contains("1 patient(s):"));
        assert!(output.contains("#1 Ama Owusu"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_reprompts_whole_field_set_on_invalid_date() {
        let script = concat!(
            "1\n",
            "Ama\nOwusu\n31-02-1990\nAccra\n12\n024-400-0000\n", // bad day
            "Ama\nOwusu\n15-06-1990\nAccra\n12\n024-400-0000\n", // retry
            "6\n"
        );
        let (output, store) = run_session(script);

        assert!(output.contains("day 31 is out of range for month 2"));
        assert!(output.contains("Added patient Ama Owusu with id 1."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_reprompts_on_undashed_phone() {
        let script = concat!(
            "1\n",
            "Ama\nOwusu\n15-06-1990\nAccra\n12\n0244000000\n",
            "Ama\nOwusu\n15-06-1990\nAccra\n12\n024-400-0000\n",
            "6\n"
        );
        let (output, _) = run_session(script);

        assert!(output.contains("phone number must match ddd-ddd-dddd"));
        assert!(output.contains("Added patient Ama Owusu with id 1."));
    }

    #[test]
    fn test_list_empty_roster() {
        let (output, _) = run_session("2\n6\n");
        assert!(output.contains("No patients on the roster yet."));
    }

    #[test]
    fn test_search_absent_id_reports_not_found() {
        let (output, _) = run_session("5\n42\n6\n");
        assert!(output.contains(NOT_FOUND));
    }

    #[test]
    fn test_search_non_numeric_id_reprompts() {
        let script = format!("{ADD_AMA}5\nabc\n1\n6\n");
        let (output, _) = run_session(&script);

        assert!(output.contains("Please enter a numeric patient id."));
        assert!(output.contains("#1 Ama Owusu"));
    }

    #[test]
    fn test_update_blank_fields_keep_values() {
        // Update id 1, change only the hometown.
        let script = format!("{ADD_AMA}3\n1\n\n\n\nKumasi\n\n\n6\n");
        let (output, store) = run_session(&script);

        assert!(output.contains("Updated patient 1."));
        let patient = store.get(1).unwrap();
        assert_eq!(patient.hometown, "Kumasi");
        assert_eq!(patient.first_name, "Ama");
        assert_eq!(patient.phone_number, "024-400-0000");
        assert_eq!(patient.patient_id, 1);
    }

    #[test]
    fn test_update_invalid_phone_reprompts_fields() {
        let script = format!(
            "{ADD_AMA}3\n1\n\n\n\n\n\n024400-0000\n\n\n\n\n\n055-111-2222\n6\n"
        );
        let (output, store) = run_session(&script);

        assert!(output.contains("phone number must match ddd-ddd-dddd"));
        assert_eq!(store.get(1).unwrap().phone_number, "055-111-2222");
    }

    #[test]
    fn test_update_absent_id_reports_not_found() {
        let (output, _) = run_session("3\n7\n6\n");
        assert!(output.contains(NOT_FOUND));
    }

    #[test]
    fn test_delete_then_search_reports_not_found() {
        let script = format!("{ADD_AMA}4\n1\n5\n1\n6\n");
        let (output, store) = run_session(&script);

        assert!(output.contains("Deleted patient Ama Owusu (id 1)."));
        assert!(output.contains(NOT_FOUND));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_absent_id_reports_not_found() {
        let (output, _) = run_session("4\n3\n6\n");
        assert!(output.contains(NOT_FOUND));
    }

    #[test]
    fn test_eof_mid_add_flow_exits_cleanly() {
        let (output, store) = run_session("1\nAma\n");
        assert!(output.contains(EXIT_NOTICE));
        assert!(store.is_empty());
    }
}
