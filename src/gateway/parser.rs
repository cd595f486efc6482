//-
// Copyright (c) 2026, the gwgate developers
//
// This file is part of gwgate.
//
// gwgate is free software: you can  redistribute it and/or modify it under the
// terms of  the GNU General Public  License as published by  the Free Software
// Foundation, either version  3 of the License, or (at  your option) any later
// version.
//
// gwgate is distributed  in the hope that  it will be useful,  but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// gwgate. If not, see <http://www.gnu.org/licenses/>.

//! The header parser.
//!
//! Headers are line-oriented `KEY=value;` text. Parsing is two passes: a
//! cheap scan for `MSG-TYPE` picks the body variant, then a single forward
//! pass over the lines fills a `HeaderFields` accumulator. The format in
//! the wild is sloppy, so the parser is deliberately permissive: lines it
//! does not recognise are skipped, truncated input keeps whatever was
//! accumulated so far, and only input that breaks mid-field degrades the
//! whole header to `Unknown`.

use std::sync::Arc;

use log::{debug, warn};

use super::command::{CommandBody, Envelope, GwCommand, HeaderFields, MessageType};
use super::wire::{
    Address, AddressList, BusyReport, FileDescriptor, FileDescriptorList,
    GwDate, StatusReport,
};
use crate::store::{Folder, GwStore};

/// Internal marker for "this header cannot be salvaged". Covers both
/// running out of input inside a field and values that fail to convert.
struct Abort;

type PResult<T> = Result<T, Abort>;

/// Removes the last character, respecting multi-byte characters.
fn drop_last(s: &str) -> &str {
    match s.char_indices().last() {
        Some((ix, _)) => &s[..ix],
        None => "",
    }
}

/// Splits on `=`, discarding trailing empty segments so that `A=` yields
/// one part rather than two.
fn split_eq(line: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = line.split('=').collect();
    while parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

/// Forward-only view over the header's lines.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> LineCursor<'a> {
        LineCursor {
            lines: text.split('\n').collect(),
            pos: 0,
        }
    }

    /// Returns the next non-blank, non-comment line, stripped.
    fn next_line(&mut self) -> PResult<&'a str> {
        loop {
            if self.pos >= self.lines.len() {
                return Err(Abort);
            }

            let raw = self.lines[self.pos];
            self.pos += 1;

            if raw.starts_with('#') {
                continue;
            }

            let stripped = raw.trim();
            if stripped.is_empty() {
                continue;
            }

            return Ok(stripped);
        }
    }

    /// Returns the next line exactly as stored, without consuming it.
    /// Continuation lines are recognised by their raw leading blank, so
    /// this must not strip.
    fn peek_raw(&self) -> PResult<&'a str> {
        if self.pos >= self.lines.len() {
            return Err(Abort);
        }
        Ok(self.lines[self.pos])
    }
}

/// Scans for the `MSG-TYPE` line and maps its value to a body variant.
/// A missing or unusable value means Mail.
fn select_type(text: &str) -> MessageType {
    for line in text.split('\n') {
        let line = line.trim();
        if !line.to_ascii_uppercase().starts_with("MSG-TYPE=") {
            continue;
        }

        let parts = split_eq(line);
        if parts.len() != 2 {
            return MessageType::Mail;
        }

        let value = parts[1].trim();
        if value.chars().count() < 2 {
            return MessageType::Mail;
        }

        return MessageType::from_wire(drop_last(value).trim());
    }

    MessageType::Mail
}

/// Extracts the value of a `KEY=value;` line, or of a `KEY=` line whose
/// value continues on the following line. An empty value is None.
fn string_value(line: &str, cur: &mut LineCursor) -> PResult<Option<String>> {
    let ix = match line.find('=') {
        Some(ix) => ix,
        None => return Ok(None),
    };

    let value = line[ix + 1..].trim();
    if !value.is_empty() {
        let value = drop_last(value).trim();
        return Ok(if value.is_empty() {
            None
        } else {
            Some(value.to_owned())
        });
    }

    let next = cur.next_line()?.trim();
    if next.chars().count() < 2 {
        return Ok(None);
    }
    let next = drop_last(next).trim();
    Ok(if next.is_empty() {
        None
    } else {
        Some(next.to_owned())
    })
}

/// True if the line closes a compound block, i.e. ends with two
/// semicolons (possibly separated by blanks).
fn end_of_block(line: &str) -> bool {
    let line = line.trim();
    if !line.ends_with(';') {
        return false;
    }
    drop_last(line).trim().ends_with(';')
}

/// Splits a `key=value;`-shaped line into its key and value, with the
/// trailing comma and up to two trailing semicolons removed. Anything
/// that does not fit the shape becomes an empty pair, which the
/// compound accumulators then ignore.
fn pair(line: &str) -> (String, String) {
    let parts = split_eq(line);
    if parts.len() != 2 {
        return (String::new(), String::new());
    }

    let first = parts[0].trim();

    let mut second = parts[1].trim();
    if second.ends_with(',') {
        second = drop_last(second).trim();
    }
    if !second.ends_with(';') {
        return (String::new(), String::new());
    }
    second = drop_last(second).trim();
    if second.ends_with(';') {
        second = drop_last(second).trim();
    }

    (first.to_owned(), second.to_owned())
}

/// Parses the date value of a `KEY=date;` line. Malformed dates leave
/// the field unset.
fn date_value(line: &str) -> Option<GwDate> {
    let parts = split_eq(line);
    if parts.len() != 2 {
        debug!("date line did not have 2 parts: {}", line);
        return None;
    }

    GwDate::parse(drop_last(parts[1]))
}

fn char_value(line: &str) -> PResult<Option<char>> {
    let parts = split_eq(line);
    if parts.len() != 2 {
        return Ok(None);
    }

    match parts[1].trim().chars().next() {
        Some(c) => Ok(Some(c)),
        None => Err(Abort),
    }
}

fn int_value(line: &str) -> PResult<Option<i32>> {
    let parts = split_eq(line);
    if parts.len() != 2 {
        return Ok(None);
    }

    let value = parts[1].trim();
    if value.is_empty() {
        return Err(Abort);
    }

    drop_last(value).parse::<i32>().map(Some).map_err(|_| Abort)
}

/// Accumulates an address block: continuation lines of `key=value`
/// pairs, a comma starting a new address, two semicolons (or a bare
/// one) ending the list.
fn address_list(cur: &mut LineCursor) -> PResult<AddressList> {
    let mut list = AddressList::new();
    let mut address = Address::new();

    loop {
        if !cur.peek_raw()?.starts_with(' ') {
            return Ok(list);
        }

        let line = cur.next_line()?;
        let (key, value) = pair(line);
        address.add_pair(&key, &value);

        if line.ends_with(',') {
            list.push(address);
            address = Address::new();
        }

        if end_of_block(line) || ";" == line {
            list.push(address);
            return Ok(list);
        }
    }
}

/// A single address block (used for `FROM=`).
fn address(cur: &mut LineCursor) -> PResult<Address> {
    let mut address = Address::new();

    loop {
        if !cur.peek_raw()?.starts_with(' ') {
            return Ok(address);
        }

        let line = cur.next_line()?;
        let (key, value) = pair(line);
        address.add_pair(&key, &value);

        if end_of_block(line) || ";" == line {
            return Ok(address);
        }
    }
}

/// A busy report block: continuation lines come in start/end pairs.
/// Pairs whose dates do not parse are dropped.
fn busy_report(cur: &mut LineCursor) -> PResult<BusyReport> {
    let mut report = BusyReport::new();

    loop {
        if !cur.peek_raw()?.starts_with(' ') {
            return Ok(report);
        }

        let line = cur.next_line()?;
        let (_, value) = pair(line);
        let start = GwDate::parse(&value);

        let line = cur.next_line()?;
        let (_, value) = pair(line);
        let end = GwDate::parse(&value);

        if let (Some(start), Some(end)) = (start, end) {
            report.push(start, end);
        }

        if line.ends_with(',') || end_of_block(line) {
            continue;
        }

        if ";" == line {
            return Ok(report);
        }
    }
}

/// An attachment block, same continuation shape as an address list.
fn file_descriptors(cur: &mut LineCursor) -> PResult<FileDescriptorList> {
    let mut list = FileDescriptorList::new();
    let mut descriptor = FileDescriptor::new();

    loop {
        if !cur.peek_raw()?.starts_with(' ') {
            return Ok(list);
        }

        let line = cur.next_line()?;
        let (key, value) = pair(line);
        descriptor.add_pair(&key, &value).map_err(|_| Abort)?;

        if line.ends_with(',') {
            list.push(descriptor);
            descriptor = FileDescriptor::new();
        }

        if end_of_block(line) || ";" == line {
            list.push(descriptor);
            return Ok(list);
        }
    }
}

/// A status report block of at most two key/value lines. Note that the
/// pair applied for the second line is re-read from the first; only the
/// second line's terminator matters.
fn status_report(cur: &mut LineCursor) -> PResult<StatusReport> {
    let mut report = StatusReport::new();

    let first = cur.next_line()?;
    let (key, value) = pair(first);
    report.set(&key, &value);
    if end_of_block(first) {
        return Ok(report);
    }

    let second = cur.next_line()?;
    let (key, value) = pair(first);
    report.set(&key, &value);
    if end_of_block(second) {
        return Ok(report);
    }

    // Trailing separator line
    let _ = cur.next_line()?;
    Ok(report)
}

fn parse_fields(cur: &mut LineCursor) -> PResult<HeaderFields> {
    let mut f = HeaderFields::default();

    loop {
        let line = match cur.next_line() {
            Ok(line) => line,
            Err(Abort) => {
                // Truncated input; keep what was accumulated
                warn!("could not parse till end of header");
                return Ok(f);
            },
        };
        let caps = line.to_ascii_uppercase();

        // An indented comment line also consumes the line after it
        if line.starts_with('#') {
            let _ = cur.next_line()?;
            continue;
        }

        if caps.starts_with("-END-") {
            return Ok(f);
        }

        // Scalars
        if caps.starts_with("BUSY-FOR") {
            f.busy_for = string_value(line, cur)?;
        } else if caps.starts_with("CALL-ACTION") {
            f.call_action = string_value(line, cur)?;
        } else if caps.starts_with("CALLER-COMPANY") {
            f.caller_company = string_value(line, cur)?;
        } else if caps.starts_with("CALLER-NAME") {
            f.caller_name = string_value(line, cur)?;
        } else if caps.starts_with("CALLER-PHONE") {
            f.caller_phone = string_value(line, cur)?;
        } else if caps.starts_with("FOLDER-NAME") {
            f.folder_name = string_value(line, cur)?;
        } else if caps.starts_with("FROM-TEXT") {
            f.from_text = string_value(line, cur)?;
        } else if caps.starts_with("-GET-DIRECTORY-") {
            f.get_directory = true;
        } else if caps.starts_with("HEADER-CHAR") {
            f.header_char = string_value(line, cur)?;
        } else if caps.starts_with("LOCATION") {
            f.location = string_value(line, cur)?;
        } else if caps.starts_with("MSG-ACTION") {
            f.msg_action = string_value(line, cur)?;
        } else if caps.starts_with("MSG-CHAR") {
            f.msg_char = string_value(line, cur)?;
        } else if caps.starts_with("MSG-FILE") {
            f.msg_file = string_value(line, cur)?;
        } else if caps.starts_with("MSG-ID") {
            f.msg_id = string_value(line, cur)?;
        } else if caps.starts_with("MSG-PRIORITY") {
            f.msg_priority = string_value(line, cur)?;
        } else if caps.starts_with("MSG-TYPE") {
            f.msg_type = string_value(line, cur)?;
        } else if caps.starts_with("MSG-VIEW") {
            f.msg_view = string_value(line, cur)?;
        } else if caps.starts_with("ORIG-MSG-ID") {
            f.orig_msg_id = string_value(line, cur)?;
        } else if caps.starts_with("SECURITY") {
            f.security = string_value(line, cur)?;
        } else if caps.starts_with("SEND-OPTIONS") {
            f.send_options = string_value(line, cur)?;
        } else if caps.starts_with("SET-STATUS") {
            f.set_status = string_value(line, cur)?;
        } else if caps.starts_with("STATUS-REQUEST") {
            f.status_request = string_value(line, cur)?;
        } else if caps.starts_with("SUBJECT") {
            f.subject = string_value(line, cur)?;
        } else if caps.starts_with("TO-CC-TEXT") {
            f.to_cc_text = string_value(line, cur)?;
        } else if caps.starts_with("TO-TEXT") {
            f.to_text = string_value(line, cur)?;
        } else if caps.starts_with("WPC-API") {
            f.wpc_api = string_value(line, cur)?;

        // Address lists
        } else if caps.starts_with("ALL-TO=") {
            f.all_to = Some(address_list(cur)?);
        } else if caps.starts_with("ALL-TO-CC=") {
            f.all_to_cc = Some(address_list(cur)?);
        } else if caps.starts_with("TO=") {
            f.to = Some(address_list(cur)?);
        } else if caps.starts_with("TO-BC=") {
            f.to_bc = Some(address_list(cur)?);

        // Dates
        } else if caps.starts_with("BEGIN-TIME") {
            f.begin_time = date_value(line);
        } else if caps.starts_with("DATE-SENT") {
            f.date_sent = date_value(line);
        } else if caps.starts_with("DISTRIBUTE-DATE") {
            f.distribute_date = date_value(line);
        } else if caps.starts_with("END-TIME") {
            f.end_time = date_value(line);
        } else if caps.starts_with("RESPOND-BY") {
            f.respond_by = date_value(line);

        // Compound blocks
        } else if caps.starts_with("ATTACH-FILE") {
            f.attach_file = Some(file_descriptors(cur)?);
        } else if caps.starts_with("BUSY-REPORT") {
            f.busy_report = Some(busy_report(cur)?);
        } else if caps.starts_with("FROM=") {
            f.from = Some(address(cur)?);
        } else if caps.starts_with("STATUS-REPORT=") {
            f.status_report = Some(status_report(cur)?);
        } else if caps.starts_with("TASK-CATEGORY=") {
            f.task_category = char_value(line)?;
        } else if caps.starts_with("TASK-PRIORITY=") {
            f.task_priority = int_value(line)?;
        }
        // Anything else is an attribute we don't model; skip it.
    }
}

/// Parses one header into a typed command. Never fails; headers the
/// parser cannot make sense of come back as `Unknown`.
pub fn parse_header(header_name: &str, text: &str) -> GwCommand {
    let tag = select_type(text);

    let mut cursor = LineCursor::new(text);
    match parse_fields(&mut cursor) {
        Ok(fields) => {
            debug!("parsed {} as {:?}", header_name, tag);

            let mut envelope = Envelope::new(header_name, text);
            if let Some(ref hc) = fields.header_char {
                envelope.header_char = hc.clone();
            }

            GwCommand {
                envelope,
                body: CommandBody::build(tag, fields),
            }
        },
        Err(Abort) => {
            warn!("could not parse header {}", header_name);
            GwCommand::unknown(header_name, text)
        },
    }
}

/// Storage-backed parser; fetches headers from the inbound folder by
/// name. Used as the processor of the parse stage.
pub struct Parser {
    store: Arc<dyn GwStore>,
}

impl Parser {
    pub fn new(store: Arc<dyn GwStore>) -> Self {
        Parser { store }
    }

    pub fn apply(&self, header_name: &str) -> GwCommand {
        if !self.store.exists(Folder::HeadersIn, header_name) {
            return GwCommand::unknown(
                header_name,
                format!("File not found: {}", header_name),
            );
        }

        let bytes = match self.store.fetch(Folder::HeadersIn, header_name) {
            Some(bytes) => bytes,
            None => {
                warn!("cannot load header file: {}", header_name);
                return GwCommand::unknown(
                    header_name,
                    format!("Cannot load header file: {}", header_name),
                );
            },
        };

        let text = String::from_utf8_lossy(&bytes);
        parse_header(header_name, &text)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    static SEARCH_HEADER: &str = "\
WPC-API= 1.2;\r
Header-Char= T50;\r
MSG-TYPE= Search;\r
-GET-DIRECTORY-\r
Msg-ID= 3EC4CB56.13F1.0A38.000;\r
From= \r
    WPD= GoogleDom;\r
    WPPO= GooglePO;\r
    WPU= ..FB-PROBE;\r
    CDBA= GoogleDom.GooglePO...FB-PROBE; ;\r
To= \r
    WPD= dom;\r
    WPPO= po;\r
    WPU= user1;\r
    CDBA= dom.po.user1; ,\r
    WPD= dom;\r
    WPPO= po;\r
    WPU= user2;\r
    CDBA= dom.po.user2; ;\r
Begin-Time= 21/5/03 0:0;\r
End-Time= 28/5/03 23:59;\r
-END-\r
";

    #[test]
    fn parses_search_header() {
        let cmd = parse_header("in.001", SEARCH_HEADER);
        assert_eq!(MessageType::Search, cmd.message_type());
        assert_eq!("T50", &*cmd.envelope.header_char);

        match cmd.body {
            CommandBody::Search(ref s) => {
                assert_eq!(
                    Some("3EC4CB56.13F1.0A38.000"),
                    s.msg_id.as_deref()
                );
                assert_eq!(Some("1.2"), s.wpc_api.as_deref());

                let from = s.from.as_ref().unwrap();
                assert_eq!(
                    Some("GoogleDom.GooglePO...FB-PROBE"),
                    from.cdba()
                );

                let to = s.to.as_ref().unwrap();
                assert_eq!(2, to.len());
                assert_eq!(
                    Some("dom.po.user1"),
                    to.first().unwrap().cdba()
                );

                let begin = s.begin_time.as_ref().unwrap();
                let end = s.end_time.as_ref().unwrap();
                assert!(begin < end);
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn missing_msg_type_means_mail() {
        let cmd = parse_header("h", "Subject= hello;\n-END-\n");
        assert_eq!(MessageType::Mail, cmd.message_type());
        match cmd.body {
            CommandBody::Mail(ref m) => {
                assert_eq!(Some("hello"), m.subject.as_deref())
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn msg_type_is_case_insensitive() {
        let cmd = parse_header("h", "MSG-TYPE= aPPt;\n-END-\n");
        assert_eq!(MessageType::Appointment, cmd.message_type());
    }

    #[test]
    fn unrecognised_msg_type_means_mail() {
        let cmd = parse_header("h", "MSG-TYPE= Telegram;\n-END-\n");
        assert_eq!(MessageType::Mail, cmd.message_type());
    }

    #[test]
    fn continuation_value_on_next_line() {
        let cmd = parse_header("h", "Subject=\n hello world;\n-END-\n");
        match cmd.body {
            CommandBody::Mail(ref m) => {
                assert_eq!(Some("hello world"), m.subject.as_deref())
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn truncated_header_keeps_accumulated_fields() {
        let cmd =
            parse_header("h", "Msg-ID= abc;\nSubject= partial;");
        match cmd.body {
            CommandBody::Mail(ref m) => {
                assert_eq!(Some("abc"), m.msg_id.as_deref());
                assert_eq!(Some("partial"), m.subject.as_deref());
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn eof_inside_address_block_is_unknown() {
        let cmd = parse_header("h", "From= \n    WPD= dom;");
        assert_eq!(MessageType::Unknown, cmd.message_type());
        assert_eq!("h", cmd.header_name());
    }

    #[test]
    fn malformed_task_priority_is_unknown() {
        let cmd =
            parse_header("h", "MSG-TYPE= Task;\nTask-Priority= abc;\n-END-\n");
        assert_eq!(MessageType::Unknown, cmd.message_type());
    }

    #[test]
    fn task_fields_parse() {
        let cmd = parse_header(
            "h",
            "MSG-TYPE= Task;\nTask-Priority= 3;\nTask-Category= A;\n-END-\n",
        );
        match cmd.body {
            CommandBody::Task(ref t) => {
                assert_eq!(Some(3), t.task_priority);
                assert_eq!(Some('A'), t.task_category);
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn comment_and_blank_lines_are_skipped() {
        let cmd = parse_header(
            "h",
            "# generated\n\nMSG-TYPE= Note;\n\nSubject= s;\n-END-\n",
        );
        assert_eq!(MessageType::Note, cmd.message_type());
    }

    #[test]
    fn empty_value_is_none() {
        let cmd = parse_header("h", "Subject= ;\n-END-\n");
        match cmd.body {
            CommandBody::Mail(ref m) => assert_eq!(None, m.subject),
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn to_bc_sets_only_the_bc_list() {
        let cmd = parse_header(
            "h",
            "To-BC= \n    CDBA= dom.po.user; ;\n-END-\n",
        );
        match cmd.body {
            CommandBody::Mail(ref m) => {
                assert!(m.to.is_none());
                let bc = m.to_bc.as_ref().unwrap();
                assert_eq!(Some("dom.po.user"), bc.first().unwrap().cdba());
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn busy_report_parses_time_slots() {
        let cmd = parse_header(
            "h",
            "MSG-TYPE= Search;\nBusy-Report= \n    \
             Start-Time= 21/5/03 10:0;,\n    End-Time= 21/5/03 11:0; ;\n-END-\n",
        );
        match cmd.body {
            CommandBody::Search(ref s) => {
                let report = s.busy_report.as_ref().unwrap();
                assert_eq!(1, report.len());
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn busy_report_keeps_every_slot_pair() {
        let cmd = parse_header(
            "h",
            "MSG-TYPE= Search;\nBusy-Report= \n    \
             Start-Time= 21/5/03 10:0;\n    End-Time= 21/5/03 11:0;,\n    \
             Start-Time= 22/5/03 10:0;\n    End-Time= 22/5/03 11:0; ;\n\
             -END-\n",
        );
        match cmd.body {
            CommandBody::Search(ref s) => {
                let report = s.busy_report.as_ref().unwrap();
                assert_eq!(2, report.len());
                let starts: Vec<_> = report
                    .iter()
                    .map(|(start, _)| start.to_string())
                    .collect();
                assert_eq!(
                    vec!["21/05/03 10:00", "22/05/03 10:00"],
                    starts
                );
            },
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn get_directory_flag() {
        let cmd =
            parse_header("h", "MSG-TYPE= Admin;\n-GET-DIRECTORY-\n-END-\n");
        match cmd.body {
            CommandBody::Admin(ref a) => assert!(a.get_directory),
            ref other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn pair_strips_comma_and_double_semicolon() {
        assert_eq!(
            ("WPD".to_owned(), "dom".to_owned()),
            pair("WPD= dom; ;")
        );
        assert_eq!(
            ("WPD".to_owned(), "dom".to_owned()),
            pair("WPD= dom;,")
        );
        assert_eq!((String::new(), String::new()), pair("WPD= dom"));
        assert_eq!((String::new(), String::new()), pair("no equals here"));
    }

    #[test]
    fn end_of_block_wants_two_semicolons() {
        assert!(end_of_block("CDBA= a.b.c; ;"));
        assert!(end_of_block("CDBA= a.b.c;;"));
        assert!(!end_of_block("CDBA= a.b.c;"));
        assert!(!end_of_block(""));
    }

    proptest! {
        // The parser sees whatever the client dropped into the folder;
        // any text at all must come out as *some* command, not a panic.
        #[test]
        fn arbitrary_text_parses_to_some_command(
            text in "(?s).{0,400}",
        ) {
            let _ = parse_header("fuzz.api", &text);
        }

        #[test]
        fn scalar_field_round_trips(
            value in "[A-Za-z0-9.@-]{1,40}",
        ) {
            let text =
                format!("MSG-TYPE= Mail;\nSubject= {};\n-END-\n", value);
            let cmd = parse_header("h", &text);
            match cmd.body {
                CommandBody::Mail(ref m) => {
                    prop_assert_eq!(Some(value), m.subject.clone());
                },
                ref other => {
                    prop_assert!(false, "unexpected body: {:?}", other)
                },
            }
        }
    }
}
