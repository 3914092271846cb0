use penkit_core::ServoSettings;
use penkit_postprocessor::process_text;

#[test]
fn test_short_travel_between_draws_is_elided() {
    let input = "G1 X0 Y0\nG1 X10 Y0\nG0 X10.1 Y0\nG1 X20 Y0\n";
    let output = process_text(input, &ServoSettings::default()).unwrap();

    assert_eq!(
        output,
        "G1 X0 Y0\n\
         G1 X10 Y0\n\
         G1 X20 Y0\n\
         G4 P0 ; Sync\n\
         M280 P0 S143 ; Servo up\n\
         G4 P100 ; Wait servo up\n"
    );
}

#[test]
fn test_long_travel_is_bracketed() {
    let input = "G1 X0 Y0\nG0 X50 Y50\n";
    let output = process_text(input, &ServoSettings::default()).unwrap();

    assert_eq!(
        output,
        "G1 X0 Y0\n\
         G4 P0 ; Sync\n\
         M280 P0 S143 ; Servo up\n\
         G4 P100 ; Wait servo up\n\
         G0 X50 Y50\n\
         G4 P0 ; Sync\n\
         M280 P0 S160 ; Servo down\n\
         G4 P100 ; Wait servo down\n\
         G4 P0 ; Sync\n\
         M280 P0 S143 ; Servo up\n\
         G4 P100 ; Wait servo up\n"
    );
}

#[test]
fn test_empty_input_yields_final_lift_only() {
    let output = process_text("", &ServoSettings::default()).unwrap();

    assert_eq!(
        output,
        "G4 P0 ; Sync\n\
         M280 P0 S143 ; Servo up\n\
         G4 P100 ; Wait servo up\n"
    );
}

#[test]
fn test_draw_moves_are_never_elided_or_altered() {
    let input = "G1 X0 Y0\nG0 X5 Y5\nG1 X6 Y6\nG0 X6.05 Y6\nG1 X9 Y9\n";
    let output = process_text(input, &ServoSettings::default()).unwrap();

    let draws: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("G1 "))
        .collect();
    assert_eq!(draws, vec!["G1 X0 Y0", "G1 X6 Y6", "G1 X9 Y9"]);
}

#[test]
fn test_zero_length_travel_produces_no_servo_records() {
    let input = "G1 X3 Y4\nG0 X3 Y4\n";
    let output = process_text(input, &ServoSettings::default()).unwrap();

    // Only the draw move and the unconditional trailing lift remain.
    assert_eq!(
        output,
        "G1 X3 Y4\n\
         G4 P0 ; Sync\n\
         M280 P0 S143 ; Servo up\n\
         G4 P100 ; Wait servo up\n"
    );
}

#[test]
fn test_custom_settings_flow_into_sequences() {
    let settings = ServoSettings {
        down_angle: 155,
        down_delay_ms: 50,
        up_angle: 146,
        up_delay_ms: 75,
        merge_threshold: 0.5,
    };
    let input = "G1 X0 Y0\nG0 X0.4 Y0\nG0 X10 Y10\n";
    let output = process_text(input, &settings).unwrap();

    // The 0.4mm travel merges away under the 0.5 threshold; the long one
    // is bracketed with the configured angles and delays.
    assert_eq!(
        output,
        "G1 X0 Y0\n\
         G4 P0 ; Sync\n\
         M280 P0 S146 ; Servo up\n\
         G4 P75 ; Wait servo up\n\
         G0 X10 Y10\n\
         G4 P0 ; Sync\n\
         M280 P0 S155 ; Servo down\n\
         G4 P50 ; Wait servo down\n\
         G4 P0 ; Sync\n\
         M280 P0 S146 ; Servo up\n\
         G4 P75 ; Wait servo up\n"
    );
}

#[test]
fn test_modal_and_comment_lines_pass_through() {
    let input = "G21 ; millimeters\nG90\nG1 X1 Y1\n";
    let output = process_text(input, &ServoSettings::default()).unwrap();

    assert!(output.starts_with("G21 ; millimeters\nG90\nG1 X1 Y1\n"));
    assert!(output.ends_with(
        "G4 P0 ; Sync\n\
         M280 P0 S143 ; Servo up\n\
         G4 P100 ; Wait servo up\n"
    ));
}
