use super::listing::{parse_listing,parse_listing_with};
use super::settings::Overflow;
use crate::lang::{Error,LogicalLine};

#[test]
fn numbered_lines() {
	let lines = parse_listing("10 PRINT\"HI\"\n20 END\n");
	assert_eq!(lines,vec![
		LogicalLine::new(10,"PRINT\"HI\""),
		LogicalLine::new(20,"END")
	]);
}

#[test]
fn whitespace_handling() {
	let lines = parse_listing("   10    CLS   \n\t20\tEND\n30\n40PRINT\n0050 BEEP");
	assert_eq!(lines,vec![
		LogicalLine::new(10,"CLS"),
		LogicalLine::new(20,"END"),
		LogicalLine::new(30,""),
		LogicalLine::new(40,"PRINT"),
		LogicalLine::new(50,"BEEP")
	]);
}

#[test]
fn dropped_lines() {
	let text = "\n   \nPRINT\"NO NUMBER\"\n-10 END\nA10 END\n10 END\n";
	assert_eq!(parse_listing(text),vec![LogicalLine::new(10,"END")]);
}

#[test]
fn crlf_separators() {
	let lines = parse_listing("10 CLS\r\n20 END\r\n");
	assert_eq!(lines,vec![
		LogicalLine::new(10,"CLS"),
		LogicalLine::new(20,"END")
	]);
}

#[test]
fn lone_carriage_return() {
	// a carriage return inside a line spoils the match, as with the original tool
	assert_eq!(parse_listing("10 A\rB\n20 END"),vec![LogicalLine::new(20,"END")]);
}

#[test]
fn order_and_duplicates_kept() {
	let lines = parse_listing("20 B\n10 A\n10 C\n");
	let nums: Vec<u16> = lines.iter().map(|l| l.line_number).collect();
	assert_eq!(nums,vec![20,10,10]);
}

#[test]
fn line_number_overflow() {
	assert_eq!(parse_listing("65535 END"),vec![LogicalLine::new(65535,"END")]);
	assert_eq!(parse_listing("70000 END"),vec![LogicalLine::new(4464,"END")]);
	assert_eq!(parse_listing("65536 END"),vec![LogicalLine::new(0,"END")]);
	assert!(parse_listing_with("65535 END",Overflow::Strict).is_ok());
	assert!(matches!(parse_listing_with("70000 END",Overflow::Strict),Err(Error::LineNumber)));
}

#[test]
fn byte_order_mark() {
	assert_eq!(parse_listing("\u{feff}10 CLS\n"),vec![LogicalLine::new(10,"CLS")]);
}
