use homescout_bot::handler::Command;
use std::str::FromStr;

#[test]
fn recognized_command_verbs() {
    assert_eq!(Command::from_str("start"), Ok(Command::Start));
    assert_eq!(Command::from_str("help"), Ok(Command::Help));
    assert_eq!(Command::from_str("listings"), Ok(Command::Listings));
    assert_eq!(Command::from_str("favorites"), Ok(Command::Favorites));
    assert_eq!(Command::from_str("settings"), Ok(Command::Settings));
    assert_eq!(Command::from_str("subscribe"), Ok(Command::Subscribe));
    assert_eq!(Command::from_str("unsubscribe"), Ok(Command::Unsubscribe));
}

#[test]
fn unrecognized_verbs_map_to_unknown() {
    assert_eq!(Command::from_str("frobnicate"), Ok(Command::Unknown));
    assert_eq!(Command::from_str("LISTINGS"), Ok(Command::Unknown));
    assert_eq!(Command::from_str(""), Ok(Command::Unknown));
}
