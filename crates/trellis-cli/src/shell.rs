//! The numbered console menu.
//!
//! The shell reads a menu choice, asks for that operation's arguments one
//! line at a time, calls into the social graph and prints the outcome. It
//! is generic over its reader and writer so the same loop serves the
//! terminal, script files and tests.
//!
//! Every argument of an operation is read before any of them is validated,
//! so a script never drifts out of step after a rejected input.

use crate::render::{self, Failure, Success};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use trellis_core::{NewProfile, ProfileField};
use trellis_graph::SocialGraph;

/// How the shell talks to its user.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellConfig {
    /// Print one JSON envelope per operation instead of prose.
    pub json: bool,
    /// Show the menu and prompts. Off when replaying a script.
    pub interactive: bool,
}

/// Menu entries, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    CreateProfile,
    CreateGroup,
    SendFriendRequest,
    AcceptFriendRequest,
    SendMessage,
    ReadMessages,
    ListGroupMembers,
    MutualFriends,
    GroupFriendRequest,
    SuggestFriends,
    ListAllUsers,
    ListFriends,
    ListPendingRequests,
    EditProfile,
    DeleteFriend,
    RejectFriendRequest,
    SendGroupMessage,
    ViewProfile,
    JoinGroup,
}

impl MenuChoice {
    /// Entries in menu order; the position is the menu number.
    const ALL: [MenuChoice; 20] = [
        Self::Exit,
        Self::CreateProfile,
        Self::CreateGroup,
        Self::SendFriendRequest,
        Self::AcceptFriendRequest,
        Self::SendMessage,
        Self::ReadMessages,
        Self::ListGroupMembers,
        Self::MutualFriends,
        Self::GroupFriendRequest,
        Self::SuggestFriends,
        Self::ListAllUsers,
        Self::ListFriends,
        Self::ListPendingRequests,
        Self::EditProfile,
        Self::DeleteFriend,
        Self::RejectFriendRequest,
        Self::SendGroupMessage,
        Self::ViewProfile,
        Self::JoinGroup,
    ];

    /// Parses a menu number.
    pub fn parse(s: &str) -> Option<Self> {
        let number: usize = s.parse().ok()?;
        Self::ALL.get(number).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Exit => "Exit",
            Self::CreateProfile => "Create Profile",
            Self::CreateGroup => "Create Group",
            Self::SendFriendRequest => "Send Friend Request",
            Self::AcceptFriendRequest => "Accept Friend Request",
            Self::SendMessage => "Send Message",
            Self::ReadMessages => "Read Messages",
            Self::ListGroupMembers => "List Group Members",
            Self::MutualFriends => "Show Mutual Friends",
            Self::GroupFriendRequest => "Send Friend Request to Group Members",
            Self::SuggestFriends => "Suggest Friends",
            Self::ListAllUsers => "List All Users",
            Self::ListFriends => "List Friends",
            Self::ListPendingRequests => "List Pending Friend Requests",
            Self::EditProfile => "Edit Profile",
            Self::DeleteFriend => "Delete Friend",
            Self::RejectFriendRequest => "Reject Friend Request",
            Self::SendGroupMessage => "Send Group Message",
            Self::ViewProfile => "View User Profile",
            Self::JoinGroup => "Join Group",
        }
    }
}

/// Interactive driver around a [`SocialGraph`].
pub struct Shell<R, W> {
    graph: SocialGraph,
    input: R,
    output: W,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(graph: SocialGraph, input: R, output: W, config: ShellConfig) -> Self {
        Self {
            graph,
            input,
            output,
            config,
        }
    }

    /// The graph being driven.
    pub fn graph(&self) -> &SocialGraph {
        &self.graph
    }

    /// Runs the menu loop until `0` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.config.interactive {
                self.print_menu()?;
            }
            let Some(line) = self.ask("Enter your choice: ")? else {
                break;
            };
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    if self.config.interactive {
                        writeln!(self.output, "Exiting.")?;
                    }
                    break;
                }
                Some(choice) => {
                    if !self.dispatch(choice)? {
                        break;
                    }
                }
                None => self.notice("Invalid choice. Please try again.")?,
            }
        }
        self.output.flush()
    }

    /// Runs one operation. Returns false if input ran out mid-way.
    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<bool> {
        tracing::debug!(?choice, "menu choice");

        match choice {
            MenuChoice::Exit => return Ok(false),
            MenuChoice::CreateProfile => {
                let Some(a) = self.ask_all(&[
                    "Enter your name: ",
                    "Enter your id/Number: ",
                    "Enter your city: ",
                    "Enter your interests: ",
                    "Enter your institution: ",
                ])?
                else {
                    return Ok(false);
                };
                if self.require(&a[..2])? {
                    let profile = NewProfile::new(&a[1], &a[0])
                        .with_city(&a[2])
                        .with_interest(&a[3])
                        .with_institution(&a[4]);
                    let result = self.graph.create_profile(profile);
                    self.report(result.map(|_| ()), |_| {
                        render::done(format!("Profile {} created.", a[1]))
                    })?;
                }
            }
            MenuChoice::CreateGroup => {
                let Some(a) = self.ask_all(&["Enter group name: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.create_group(&a[0]);
                    self.report(result, |_| render::done(format!("Group {} created.", a[0])))?;
                }
            }
            MenuChoice::SendFriendRequest => {
                let Some(a) = self.ask_all(&["Enter sender ID: ", "Enter receiver ID: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.send_friend_request(&a[0], &a[1]);
                    let (from, to) = (self.display_name(&a[0]), self.display_name(&a[1]));
                    self.report(result, |_| {
                        render::done(format!("Friend request sent from {from} to {to}."))
                    })?;
                }
            }
            MenuChoice::AcceptFriendRequest => {
                let Some(a) = self.ask_all(&["Enter your user ID: ", "Enter sender ID: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.accept_friend_request(&a[0], &a[1]);
                    let (user, sender) = (self.display_name(&a[0]), self.display_name(&a[1]));
                    self.report(result, |_| {
                        render::done(format!("{sender} and {user} are now friends."))
                    })?;
                }
            }
            MenuChoice::SendMessage => {
                let Some(a) = self.ask_all(&[
                    "Enter sender ID: ",
                    "Enter receiver ID: ",
                    "Enter message: ",
                ])?
                else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.send_message(&a[0], &a[1], &a[2]);
                    let (from, to) = (self.display_name(&a[0]), self.display_name(&a[1]));
                    self.report(result, |_| {
                        render::done(format!("Message sent from {from} to {to}."))
                    })?;
                }
            }
            MenuChoice::ReadMessages => {
                let Some(a) = self.ask_all(&["Enter user ID: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.read_messages(&a[0]);
                    self.report(result, |entries| render::inbox(&a[0], entries))?;
                }
            }
            MenuChoice::ListGroupMembers => {
                let Some(a) = self.ask_all(&["Enter group name: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.group_members(&a[0]);
                    self.report(result, |members| {
                        render::user_list(
                            format!("Members of the group {}:", a[0]),
                            members,
                            "No members.",
                        )
                    })?;
                }
            }
            MenuChoice::MutualFriends => {
                let Some(a) = self.ask_all(&["Enter first user ID: ", "Enter second user ID: "])?
                else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.mutual_friends(&a[0], &a[1]);
                    self.report(result, |users| {
                        render::user_list(
                            format!("Mutual friends between {} and {}:", a[0], a[1]),
                            users,
                            "No mutual friends.",
                        )
                    })?;
                }
            }
            MenuChoice::GroupFriendRequest => {
                let Some(a) = self.ask_all(&["Enter your user ID: ", "Enter group name: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.send_friend_request_to_group(&a[0], &a[1]);
                    self.report(result, |&sent| {
                        if sent == 0 {
                            vec!["No new friend requests sent.".yellow().to_string()]
                        } else {
                            render::done(format!("Sent {sent} friend request(s) to {}.", a[1]))
                        }
                    })?;
                }
            }
            MenuChoice::SuggestFriends => {
                let Some(a) = self.ask_all(&["Enter user ID: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.suggest_friends(&a[0]);
                    self.report(result, |found| render::suggestions(&a[0], found))?;
                }
            }
            MenuChoice::ListAllUsers => {
                let users = self.graph.list_all_users();
                self.report(Ok(users), |users| {
                    render::user_list("All users:", users, "No users.")
                })?;
            }
            MenuChoice::ListFriends => {
                let Some(a) = self.ask_all(&["Enter user ID: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.list_friends(&a[0]);
                    self.report(result, |friends| {
                        render::user_list(format!("Friends of {}:", a[0]), friends, "No friends.")
                    })?;
                }
            }
            MenuChoice::ListPendingRequests => {
                let Some(a) = self.ask_all(&["Enter user ID: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.list_pending_requests(&a[0]);
                    self.report(result, |pending| {
                        render::user_list(
                            format!("Pending friend requests for {}:", a[0]),
                            pending,
                            "No pending requests.",
                        )
                    })?;
                }
            }
            MenuChoice::EditProfile => return self.edit_profile(),
            MenuChoice::DeleteFriend => {
                let Some(a) = self.ask_all(&[
                    "Enter your user ID: ",
                    "Enter friend's ID to remove: ",
                ])?
                else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.delete_friend(&a[0], &a[1]);
                    let friend = self.display_name(&a[1]);
                    self.report(result, |_| {
                        render::done(format!("You are no longer friends with {friend}."))
                    })?;
                }
            }
            MenuChoice::RejectFriendRequest => {
                let Some(a) = self.ask_all(&[
                    "Enter your user ID: ",
                    "Enter ID of request to reject: ",
                ])?
                else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.reject_friend_request(&a[0], &a[1]);
                    let sender = self.display_name(&a[1]);
                    self.report(result, |_| {
                        render::done(format!("Friend request from {sender} rejected."))
                    })?;
                }
            }
            MenuChoice::SendGroupMessage => {
                let Some(a) = self.ask_all(&[
                    "Enter your user ID: ",
                    "Enter group name: ",
                    "Enter message: ",
                ])?
                else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.send_group_message(&a[0], &a[1], &a[2]);
                    self.report(result, |&count| {
                        render::done(format!(
                            "Message sent to {count} members of group {}.",
                            a[1]
                        ))
                    })?;
                }
            }
            MenuChoice::ViewProfile => {
                let Some(a) = self.ask_all(&["Enter user ID to view: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.view_profile(&a[0]);
                    self.report(result, render::profile)?;
                }
            }
            MenuChoice::JoinGroup => {
                let Some(a) = self.ask_all(&["Enter your user ID: ", "Enter group name: "])? else {
                    return Ok(false);
                };
                if self.require(&a)? {
                    let result = self.graph.join_group(&a[0], &a[1]);
                    let user = self.display_name(&a[0]);
                    self.report(result, |_| {
                        render::done(format!("{user} joined the group {}.", a[1]))
                    })?;
                }
            }
        }

        Ok(true)
    }

    /// The edit sub-menu: pick a field, enter a value, repeat until `0`.
    fn edit_profile(&mut self) -> io::Result<bool> {
        let Some(user_id) = self.ask("Enter your user ID: ")? else {
            return Ok(false);
        };
        if let Err(err) = self.graph.view_profile(&user_id) {
            self.report::<()>(Err(err), |_| Vec::new())?;
            return Ok(true);
        }

        loop {
            if self.config.interactive {
                let name = self.display_name(&user_id);
                writeln!(self.output, "\nEdit Profile for {name}:")?;
                for (number, field) in ProfileField::ALL.iter().enumerate() {
                    writeln!(self.output, "{}. Edit {}", number + 1, field)?;
                }
                writeln!(self.output, "0. Back to Main Menu")?;
            }
            let Some(choice) = self.ask("Enter your choice: ")? else {
                return Ok(false);
            };
            if choice == "0" {
                return Ok(true);
            }

            let field = match choice.parse::<usize>() {
                Ok(n) if (1..=ProfileField::ALL.len()).contains(&n) => {
                    Ok(ProfileField::ALL[n - 1])
                }
                _ => choice.parse::<ProfileField>(),
            };
            let Some(value) = self.ask("Enter new value: ")? else {
                return Ok(false);
            };

            let result = field.and_then(|field| {
                self.graph
                    .edit_profile(&user_id, field, &value)
                    .map(|()| field)
            });
            self.report(result, |field| render::done(format!("Updated {field}.")))?;
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // I/O helpers
    // ─────────────────────────────────────────────────────────────────────

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "Menu:".bold())?;
        for (number, choice) in MenuChoice::ALL.iter().enumerate().skip(1) {
            writeln!(self.output, "{number}. {}", choice.label())?;
        }
        writeln!(self.output, "0. {}", MenuChoice::Exit.label())
    }

    /// Prompts (when interactive) and reads one trimmed line.
    /// Returns `None` at end of input.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.config.interactive {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
        }

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask_all(&mut self, prompts: &[&str]) -> io::Result<Option<Vec<String>>> {
        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.ask(prompt)? {
                Some(answer) => answers.push(answer),
                None => return Ok(None),
            }
        }
        Ok(Some(answers))
    }

    /// Reports and returns false if any answer is empty.
    fn require(&mut self, answers: &[String]) -> io::Result<bool> {
        if answers.iter().any(String::is_empty) {
            self.notice("Input cannot be empty.")?;
            return Ok(false);
        }
        Ok(true)
    }

    fn notice(&mut self, message: &str) -> io::Result<()> {
        if self.config.json {
            let failure = Failure {
                ok: false,
                error: "invalid_input",
                message: message.to_string(),
            };
            serde_json::to_writer(&mut self.output, &failure)?;
            writeln!(self.output)
        } else {
            writeln!(self.output, "{}", message.yellow())
        }
    }

    /// "Name (id)" for a known user, the bare ID otherwise.
    fn display_name(&self, id: &str) -> String {
        self.graph
            .view_profile(id)
            .map(|p| format!("{} ({})", p.name, p.id))
            .unwrap_or_else(|_| id.to_string())
    }

    fn report<T: Serialize>(
        &mut self,
        result: trellis_core::Result<T>,
        human: impl FnOnce(&T) -> Vec<String>,
    ) -> io::Result<()> {
        match (&result, self.config.json) {
            (Ok(value), true) => serde_json::to_writer(&mut self.output, &Success::new(value))?,
            (Err(err), true) => serde_json::to_writer(&mut self.output, &Failure::from(err))?,
            (Ok(value), false) => {
                for line in human(value) {
                    writeln!(self.output, "{line}")?;
                }
                return Ok(());
            }
            (Err(err), false) => {
                tracing::debug!(code = err.code(), "operation rejected");
                return writeln!(self.output, "{}", render::failed(err));
            }
        }
        writeln!(self.output)
    }
}
