//! The table of single-letter options understood by the ssh client.

use crate::error::AdverbError;

/// One known client option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// The option letter, unique across [`OPTIONS`].
    pub letter: char,
    /// Placeholder shown in help for the option's value. `None` for flags.
    pub value_hint: Option<&'static str>,
    /// One-line description shown in help.
    pub description: &'static str,
}

impl OptionSpec {
    const fn flag(letter: char, description: &'static str) -> Self {
        Self {
            letter,
            value_hint: None,
            description,
        }
    }

    const fn valued(letter: char, hint: &'static str, description: &'static str) -> Self {
        Self {
            letter,
            value_hint: Some(hint),
            description,
        }
    }

    /// Whether the option consumes a value, either attached or as the next argument.
    pub fn takes_value(&self) -> bool {
        self.value_hint.is_some()
    }
}

/// Every single-letter option ssh accepts, in display order.
pub static OPTIONS: &[OptionSpec] = &[
    OptionSpec::flag('1', "Use protocol version 1 only"),
    OptionSpec::flag('2', "Use protocol version 2 only"),
    OptionSpec::flag('4', "Use IPv4 addresses only"),
    OptionSpec::flag('6', "Use IPv6 addresses only"),
    OptionSpec::flag('A', "Forward authentication agent connection"),
    OptionSpec::flag('a', "Do not forward authentication agent connection"),
    OptionSpec::valued('B', "BIND-INTERFACE", "Bind to the address of an interface"),
    OptionSpec::valued('b', "BIND-ADDRESS", "Set local socket address"),
    OptionSpec::flag('C', "Enable compression"),
    OptionSpec::valued('c', "CIPHER-SPEC", "Set acceptable cipher(s)"),
    OptionSpec::valued(
        'D',
        "[BIND_ADDRESS:]PORT",
        "Local dynamic application-level (SOCKS) port forward",
    ),
    OptionSpec::valued('E', "LOG-FILE", "Append debug logs to a file"),
    OptionSpec::valued('e', "ESCAPE-CHAR", "Set escape character"),
    OptionSpec::valued('F', "CONFIG-FILE", "Set configuration file"),
    OptionSpec::flag('f', "Go into background before executing command"),
    OptionSpec::flag('G', "Print configuration and exit"),
    OptionSpec::flag('g', "Allow remote hosts to connect to local forwarded ports"),
    OptionSpec::valued('I', "PKCS11", "Set PKCS#11 provider"),
    OptionSpec::valued('i', "IDENTITY-FILE", "Set private key file"),
    OptionSpec::valued('J', "DESTINATION", "Connect via a jump host"),
    OptionSpec::flag('K', "Enable GSSAPI authentication and forwarding"),
    OptionSpec::flag('k', "Disable GSSAPI forward"),
    OptionSpec::valued(
        'L',
        "[BIND-ADDRESS:]PORT:HOST:HOSTPORT",
        "Forward local PORT via server to HOST:HOSTPORT",
    ),
    OptionSpec::valued('l', "LOGIN-NAME", "Set login name"),
    OptionSpec::flag('M', "Set master mode"),
    OptionSpec::valued('m', "MAC-SPEC", "Set acceptable MAC(s)"),
    OptionSpec::flag('N', "Disable remote command execution"),
    OptionSpec::flag('n', "Disable stdin"),
    OptionSpec::valued(
        'O',
        "check|forward|cancel|exit|stop",
        "Send command to master process",
    ),
    OptionSpec::valued('o', "OPTION=VALUE", "Set an ssh_config option"),
    OptionSpec::valued('P', "TAG", "Select configuration by tag"),
    OptionSpec::valued('p', "PORT", "Set remote port number"),
    OptionSpec::valued('Q', "QUERY-OPTION", "Query supported algorithms"),
    OptionSpec::flag('q', "Quiet mode"),
    OptionSpec::valued(
        'R',
        "[BIND-ADDRESS:]PORT:HOST:HOSTPORT",
        "Forward remote PORT via client to HOST:HOSTPORT",
    ),
    OptionSpec::valued('S', "CTL-PATH", "Set control socket location"),
    OptionSpec::flag('s', "Execute subsystem instead of command"),
    OptionSpec::flag('T', "Disable pseudo-tty allocation"),
    OptionSpec::flag('t', "Force pseudo-tty allocation"),
    OptionSpec::flag('V', "Display version and exit"),
    OptionSpec::flag('v', "Set verbose mode"),
    OptionSpec::valued('W', "HOST:PORT", "Forward client stdin/out to HOST:PORT"),
    OptionSpec::valued('w', "LOCAL-TUN[:REMOTE_TUN]", "tun(4) forwarding"),
    OptionSpec::flag('X', "Enable X11 forwarding"),
    OptionSpec::flag('x', "Disable X11 forwarding"),
    OptionSpec::flag('Y', "Enable trusted X11 forwarding"),
    OptionSpec::flag('y', "Log to syslog instead of stderr"),
];

/// Find the option for `letter`.
///
/// Unknown letters are an error; there is no default option.
pub fn lookup(letter: char) -> Result<&'static OptionSpec, AdverbError> {
    OPTIONS
        .iter()
        .find(|spec| spec.letter == letter)
        .ok_or(AdverbError::UnknownOption(letter))
}

/// Walk the letters of one option cluster (the token without its leading `-`).
///
/// Returns `true` when the cluster ends in a value-taking letter with nothing
/// attached, i.e. the next argument is that letter's value. Bytes after a
/// value-taking letter are its attached value and are not looked up.
pub fn cluster_wants_next(cluster: &[u8]) -> Result<bool, AdverbError> {
    for (i, &letter) in cluster.iter().enumerate() {
        if !letter.is_ascii() {
            // Not a table letter; report the whole character it starts.
            let shown = String::from_utf8_lossy(&cluster[i..]).chars().next();
            return Err(AdverbError::UnknownOption(
                shown.unwrap_or(char::REPLACEMENT_CHARACTER),
            ));
        }
        if lookup(char::from(letter))?.takes_value() {
            return Ok(i + 1 == cluster.len());
        }
    }
    Ok(false)
}
