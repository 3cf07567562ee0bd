use kitbag::auth::{CredentialOptions, authenticate_with_credentials};
use kitbag::container::{ContainerErrors, DataContainer, read_data_container, write_data_container};
use kitbag::numbers::write_number_properties;
use kitbag::time::read_task_duration;
use kitbag::utils::{PromptErrors, Terminal};
use std::io::Cursor;
use std::num::NonZeroUsize;

fn scripted(input: &str) -> Terminal<Cursor<&[u8]>, Vec<u8>> {
    Terminal::new(Cursor::new(input.as_bytes()), Vec::new())
}

fn transcript(terminal: Terminal<Cursor<&[u8]>, Vec<u8>>) -> String {
    String::from_utf8(terminal.into_parts().1).unwrap()
}

#[test]
fn populate_accepts_negative_numbers_without_a_predicate() {
    let mut terminal = scripted("-5\n30\nAlice\n");
    let record: DataContainer<(i32, String)> =
        read_data_container(["Age", "Name"], &mut terminal).unwrap();

    assert_eq!(*record.get_field::<0>(), -5);
    assert_eq!(record.get_field::<1>(), "30");
    assert_eq!(transcript(terminal), "Enter Age: Enter Name: ");
}

#[test]
fn range_prompt_reports_each_rejection() {
    let mut terminal = scripted("15\nabc\n7\n");
    let value: i32 = terminal.ask_number("Enter 1-10: ", 1, 10).unwrap();

    assert_eq!(value, 7);
    assert_eq!(
        transcript(terminal),
        "Enter 1-10: Please enter a number between 1 and 10.\n\
         Enter 1-10: Error: Invalid integer format. Please enter a number between 1 and 10.\n\
         Enter 1-10: "
    );
}

#[test]
fn report_lists_header_then_fields() {
    let mut record = DataContainer::<(i32, i32)>::new(["X", "Y"]).unwrap();
    record.set_field::<0>(1);
    record.set_field::<1>(2);

    let mut out = Vec::new();
    write_data_container(&mut out, &record, Some("Report")).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().collect::<Vec<_>>(), ["Report", "X: 1", "Y: 2"]);
}

#[test]
fn mismatched_names_are_rejected_before_prompting() {
    let mut terminal = scripted("1\n");
    let res: Result<DataContainer<(i32, f64)>, _> = read_data_container(["Only"], &mut terminal);

    assert!(matches!(
        res,
        Err(ContainerErrors::ArityMismatch {
            expected: 2,
            found: 1
        })
    ));
    assert_eq!(transcript(terminal), "");
}

#[test]
fn closed_input_surfaces_through_the_container() {
    let mut terminal = scripted("oops\n");
    let res: Result<DataContainer<(u8,)>, _> = read_data_container(["Count"], &mut terminal);

    assert!(matches!(res, Err(ContainerErrors::Prompt(PromptErrors::InputClosed))));
}

#[test]
fn one_session_drives_several_prompts() {
    let mut terminal = scripted("0\n2\n3\n4\n5\nguest\nguest\nadmin\nsecret\n")
        .with_max_attempts(NonZeroUsize::new(5).unwrap());

    let duration = read_task_duration(&mut terminal).unwrap();
    assert_eq!(duration.to_string(), "2d 3h 4m 5s");

    let result = authenticate_with_credentials(
        &mut terminal,
        |user, pass| user == "admin" && pass == "secret",
        &CredentialOptions::default(),
    )
    .unwrap();
    assert!(result.is_success());

    let out = transcript(terminal);
    assert!(out.starts_with(
        "Please Enter Number Of Days? Please enter a number between 1 and 2147483647.\n"
    ));
    assert!(out.ends_with("Invalid credentials\nUsername: Password: "));
}

#[test]
fn number_properties_line() {
    let mut out = Vec::new();
    write_number_properties(&mut out, -7).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Number -7 is: Odd, Negative\n");
}
