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

//! The typed command model.
//!
//! One inbound header becomes exactly one `GwCommand`: a shared envelope
//! (the header's name and raw text) plus a body variant for the message
//! kind, holding only the attributes that kind can carry. The parser
//! accumulates attributes into `HeaderFields` and the body constructors
//! pick out what applies to them; anything else is discarded.

use super::wire::{
    Address, AddressList, BusyReport, FileDescriptorList, GwDate,
    StatusReport,
};

pub const DEFAULT_HEADER_CHAR: &str = "T50";

/// The message kind tag, taken from the `MSG-TYPE` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    Search,
    Mail,
    Appointment,
    Note,
    Task,
    Phone,
    Admin,
    PassThrough,
    Unknown,
}

impl MessageType {
    /// Maps a `MSG-TYPE` value to a tag. Anything unrecognised is Mail.
    pub fn from_wire(value: &str) -> MessageType {
        if "Search".eq_ignore_ascii_case(value) {
            MessageType::Search
        } else if "Appt".eq_ignore_ascii_case(value) {
            MessageType::Appointment
        } else if "Note".eq_ignore_ascii_case(value) {
            MessageType::Note
        } else if "Task".eq_ignore_ascii_case(value) {
            MessageType::Task
        } else if "Phone".eq_ignore_ascii_case(value) {
            MessageType::Phone
        } else if "Admin".eq_ignore_ascii_case(value) {
            MessageType::Admin
        } else if "PassThrough".eq_ignore_ascii_case(value) {
            MessageType::PassThrough
        } else {
            MessageType::Mail
        }
    }
}

/// The identity shared by every command: the header's filename, its raw
/// text (kept for logging and probe detection), and the header character
/// set tag.
#[derive(Clone, Debug)]
pub struct Envelope {
    pub header_name: String,
    pub header_content: String,
    pub header_char: String,
}

impl Envelope {
    pub fn new(
        header_name: impl Into<String>,
        header_content: impl Into<String>,
    ) -> Envelope {
        Envelope {
            header_name: header_name.into(),
            header_content: header_content.into(),
            header_char: DEFAULT_HEADER_CHAR.to_owned(),
        }
    }
}

/// Parse-time accumulator for every attribute the wire format can carry.
///
/// This is the only place where "all fields of all kinds" coexist; it never
/// leaves the parsing layer.
#[derive(Clone, Debug, Default)]
pub struct HeaderFields {
    pub busy_for: Option<String>,
    pub call_action: Option<String>,
    pub caller_company: Option<String>,
    pub caller_name: Option<String>,
    pub caller_phone: Option<String>,
    pub folder_name: Option<String>,
    pub from_text: Option<String>,
    pub get_directory: bool,
    pub header_char: Option<String>,
    pub location: Option<String>,
    pub msg_action: Option<String>,
    pub msg_char: Option<String>,
    pub msg_file: Option<String>,
    pub msg_id: Option<String>,
    pub msg_priority: Option<String>,
    pub msg_type: Option<String>,
    pub msg_view: Option<String>,
    pub orig_msg_id: Option<String>,
    pub security: Option<String>,
    pub send_options: Option<String>,
    pub set_status: Option<String>,
    pub status_request: Option<String>,
    pub subject: Option<String>,
    pub to_cc_text: Option<String>,
    pub to_text: Option<String>,
    pub wpc_api: Option<String>,

    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub to: Option<AddressList>,
    pub to_bc: Option<AddressList>,
    pub from: Option<Address>,

    pub begin_time: Option<GwDate>,
    pub date_sent: Option<GwDate>,
    pub distribute_date: Option<GwDate>,
    pub end_time: Option<GwDate>,
    pub respond_by: Option<GwDate>,

    pub attach_file: Option<FileDescriptorList>,
    pub busy_report: Option<BusyReport>,
    pub status_report: Option<StatusReport>,
    pub task_category: Option<char>,
    pub task_priority: Option<i32>,
}

/// A free/busy search request.
#[derive(Clone, Debug, Default)]
pub struct SearchCommand {
    pub msg_id: Option<String>,
    pub wpc_api: Option<String>,
    pub from: Option<Address>,
    pub to: Option<AddressList>,
    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub begin_time: Option<GwDate>,
    pub end_time: Option<GwDate>,
    pub busy_for: Option<String>,
    pub busy_report: Option<BusyReport>,
    pub from_text: Option<String>,
    pub to_text: Option<String>,
    pub date_sent: Option<GwDate>,
    pub send_options: Option<String>,
    pub status_request: Option<String>,
}

/// A mail message.
#[derive(Clone, Debug, Default)]
pub struct MailCommand {
    pub msg_id: Option<String>,
    pub orig_msg_id: Option<String>,
    pub from: Option<Address>,
    pub to: Option<AddressList>,
    pub to_bc: Option<AddressList>,
    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub from_text: Option<String>,
    pub to_text: Option<String>,
    pub to_cc_text: Option<String>,
    pub subject: Option<String>,
    pub security: Option<String>,
    pub msg_priority: Option<String>,
    pub msg_action: Option<String>,
    pub msg_char: Option<String>,
    pub msg_file: Option<String>,
    pub msg_view: Option<String>,
    pub folder_name: Option<String>,
    pub send_options: Option<String>,
    pub set_status: Option<String>,
    pub status_request: Option<String>,
    pub status_report: Option<StatusReport>,
    pub date_sent: Option<GwDate>,
    pub attach_file: Option<FileDescriptorList>,
}

/// A calendar appointment.
#[derive(Clone, Debug, Default)]
pub struct AppointmentCommand {
    pub msg_id: Option<String>,
    pub orig_msg_id: Option<String>,
    pub from: Option<Address>,
    pub to: Option<AddressList>,
    pub to_bc: Option<AddressList>,
    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub from_text: Option<String>,
    pub to_text: Option<String>,
    pub to_cc_text: Option<String>,
    pub subject: Option<String>,
    pub location: Option<String>,
    pub begin_time: Option<GwDate>,
    pub end_time: Option<GwDate>,
    pub date_sent: Option<GwDate>,
    pub distribute_date: Option<GwDate>,
    pub send_options: Option<String>,
    pub msg_action: Option<String>,
    pub set_status: Option<String>,
    pub status_request: Option<String>,
    pub status_report: Option<StatusReport>,
    pub attach_file: Option<FileDescriptorList>,
}

/// A note posted to a calendar day.
#[derive(Clone, Debug, Default)]
pub struct NoteCommand {
    pub msg_id: Option<String>,
    pub orig_msg_id: Option<String>,
    pub from: Option<Address>,
    pub to: Option<AddressList>,
    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub from_text: Option<String>,
    pub to_text: Option<String>,
    pub subject: Option<String>,
    pub date_sent: Option<GwDate>,
    pub distribute_date: Option<GwDate>,
    pub send_options: Option<String>,
    pub attach_file: Option<FileDescriptorList>,
}

/// A task with an optional deadline and priority.
#[derive(Clone, Debug, Default)]
pub struct TaskCommand {
    pub msg_id: Option<String>,
    pub orig_msg_id: Option<String>,
    pub from: Option<Address>,
    pub to: Option<AddressList>,
    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub from_text: Option<String>,
    pub to_text: Option<String>,
    pub subject: Option<String>,
    pub begin_time: Option<GwDate>,
    pub respond_by: Option<GwDate>,
    pub date_sent: Option<GwDate>,
    pub task_category: Option<char>,
    pub task_priority: Option<i32>,
    pub send_options: Option<String>,
    pub attach_file: Option<FileDescriptorList>,
}

/// A phone-message slip.
#[derive(Clone, Debug, Default)]
pub struct PhoneCommand {
    pub msg_id: Option<String>,
    pub from: Option<Address>,
    pub to: Option<AddressList>,
    pub all_to: Option<AddressList>,
    pub all_to_cc: Option<AddressList>,
    pub from_text: Option<String>,
    pub to_text: Option<String>,
    pub subject: Option<String>,
    pub date_sent: Option<GwDate>,
    pub call_action: Option<String>,
    pub caller_company: Option<String>,
    pub caller_name: Option<String>,
    pub caller_phone: Option<String>,
    pub send_options: Option<String>,
}

/// An administrative request, e.g. a directory synchronisation.
#[derive(Clone, Debug, Default)]
pub struct AdminCommand {
    pub get_directory: bool,
    pub msg_id: Option<String>,
    pub from: Option<Address>,
    pub date_sent: Option<GwDate>,
}

/// An opaque message forwarded without interpretation.
#[derive(Clone, Debug, Default)]
pub struct PassThroughCommand {
    pub msg_id: Option<String>,
    pub msg_file: Option<String>,
    pub date_sent: Option<GwDate>,
    pub attach_file: Option<FileDescriptorList>,
}

#[derive(Clone, Debug)]
pub enum CommandBody {
    Search(SearchCommand),
    Mail(MailCommand),
    Appointment(AppointmentCommand),
    Note(NoteCommand),
    Task(TaskCommand),
    Phone(PhoneCommand),
    Admin(AdminCommand),
    PassThrough(PassThroughCommand),
    /// The header could not be parsed at all.
    Unknown,
}

impl CommandBody {
    /// Builds the body for `tag`, keeping the fields that kind can carry.
    pub fn build(tag: MessageType, f: HeaderFields) -> CommandBody {
        match tag {
            MessageType::Search => CommandBody::Search(SearchCommand {
                msg_id: f.msg_id,
                wpc_api: f.wpc_api,
                from: f.from,
                to: f.to,
                all_to: f.all_to,
                all_to_cc: f.all_to_cc,
                begin_time: f.begin_time,
                end_time: f.end_time,
                busy_for: f.busy_for,
                busy_report: f.busy_report,
                from_text: f.from_text,
                to_text: f.to_text,
                date_sent: f.date_sent,
                send_options: f.send_options,
                status_request: f.status_request,
            }),
            MessageType::Mail => CommandBody::Mail(MailCommand {
                msg_id: f.msg_id,
                orig_msg_id: f.orig_msg_id,
                from: f.from,
                to: f.to,
                to_bc: f.to_bc,
                all_to: f.all_to,
                all_to_cc: f.all_to_cc,
                from_text: f.from_text,
                to_text: f.to_text,
                to_cc_text: f.to_cc_text,
                subject: f.subject,
                security: f.security,
                msg_priority: f.msg_priority,
                msg_action: f.msg_action,
                msg_char: f.msg_char,
                msg_file: f.msg_file,
                msg_view: f.msg_view,
                folder_name: f.folder_name,
                send_options: f.send_options,
                set_status: f.set_status,
                status_request: f.status_request,
                status_report: f.status_report,
                date_sent: f.date_sent,
                attach_file: f.attach_file,
            }),
            MessageType::Appointment => {
                CommandBody::Appointment(AppointmentCommand {
                    msg_id: f.msg_id,
                    orig_msg_id: f.orig_msg_id,
                    from: f.from,
                    to: f.to,
                    to_bc: f.to_bc,
                    all_to: f.all_to,
                    all_to_cc: f.all_to_cc,
                    from_text: f.from_text,
                    to_text: f.to_text,
                    to_cc_text: f.to_cc_text,
                    subject: f.subject,
                    location: f.location,
                    begin_time: f.begin_time,
                    end_time: f.end_time,
                    date_sent: f.date_sent,
                    distribute_date: f.distribute_date,
                    send_options: f.send_options,
                    msg_action: f.msg_action,
                    set_status: f.set_status,
                    status_request: f.status_request,
                    status_report: f.status_report,
                    attach_file: f.attach_file,
                })
            },
            MessageType::Note => CommandBody::Note(NoteCommand {
                msg_id: f.msg_id,
                orig_msg_id: f.orig_msg_id,
                from: f.from,
                to: f.to,
                all_to: f.all_to,
                all_to_cc: f.all_to_cc,
                from_text: f.from_text,
                to_text: f.to_text,
                subject: f.subject,
                date_sent: f.date_sent,
                distribute_date: f.distribute_date,
                send_options: f.send_options,
                attach_file: f.attach_file,
            }),
            MessageType::Task => CommandBody::Task(TaskCommand {
                msg_id: f.msg_id,
                orig_msg_id: f.orig_msg_id,
                from: f.from,
                to: f.to,
                all_to: f.all_to,
                all_to_cc: f.all_to_cc,
                from_text: f.from_text,
                to_text: f.to_text,
                subject: f.subject,
                begin_time: f.begin_time,
                respond_by: f.respond_by,
                date_sent: f.date_sent,
                task_category: f.task_category,
                task_priority: f.task_priority,
                send_options: f.send_options,
                attach_file: f.attach_file,
            }),
            MessageType::Phone => CommandBody::Phone(PhoneCommand {
                msg_id: f.msg_id,
                from: f.from,
                to: f.to,
                all_to: f.all_to,
                all_to_cc: f.all_to_cc,
                from_text: f.from_text,
                to_text: f.to_text,
                subject: f.subject,
                date_sent: f.date_sent,
                call_action: f.call_action,
                caller_company: f.caller_company,
                caller_name: f.caller_name,
                caller_phone: f.caller_phone,
                send_options: f.send_options,
            }),
            MessageType::Admin => CommandBody::Admin(AdminCommand {
                get_directory: f.get_directory,
                msg_id: f.msg_id,
                from: f.from,
                date_sent: f.date_sent,
            }),
            MessageType::PassThrough => {
                CommandBody::PassThrough(PassThroughCommand {
                    msg_id: f.msg_id,
                    msg_file: f.msg_file,
                    date_sent: f.date_sent,
                    attach_file: f.attach_file,
                })
            },
            MessageType::Unknown => CommandBody::Unknown,
        }
    }
}

/// One fully parsed inbound header.
#[derive(Clone, Debug)]
pub struct GwCommand {
    pub envelope: Envelope,
    pub body: CommandBody,
}

impl GwCommand {
    /// Wraps a header that could not be parsed.
    pub fn unknown(
        header_name: impl Into<String>,
        header_content: impl Into<String>,
    ) -> GwCommand {
        GwCommand {
            envelope: Envelope::new(header_name, header_content),
            body: CommandBody::Unknown,
        }
    }

    pub fn message_type(&self) -> MessageType {
        match self.body {
            CommandBody::Search(_) => MessageType::Search,
            CommandBody::Mail(_) => MessageType::Mail,
            CommandBody::Appointment(_) => MessageType::Appointment,
            CommandBody::Note(_) => MessageType::Note,
            CommandBody::Task(_) => MessageType::Task,
            CommandBody::Phone(_) => MessageType::Phone,
            CommandBody::Admin(_) => MessageType::Admin,
            CommandBody::PassThrough(_) => MessageType::PassThrough,
            CommandBody::Unknown => MessageType::Unknown,
        }
    }

    pub fn header_name(&self) -> &str {
        &self.envelope.header_name
    }

    pub fn header_content(&self) -> &str {
        &self.envelope.header_content
    }
}
