//! Static catalog of standard DHCP option codes.
//!
//! Pure lookup data for editors and reporting: canonical names, value-format
//! hints, and examples. Nothing here mutates or validates a configuration.

/// One standard DHCP option definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionDefinition {
    pub code: u16,
    pub name: &'static str,
    pub description: &'static str,
    pub value_hint: &'static str,
    pub example: &'static str,
}

/// Standard options in ascending code order.
pub const STANDARD_OPTIONS: &[OptionDefinition] = &[
    OptionDefinition {
        code: 1,
        name: "SUBNET_MASK",
        description: "Subnet mask for the client",
        value_hint: "IP address format",
        example: "255.255.255.0",
    },
    OptionDefinition {
        code: 2,
        name: "TIME_OFFSET",
        description: "Time offset from UTC in seconds",
        value_hint: "Number (seconds from UTC)",
        example: "0",
    },
    OptionDefinition {
        code: 3,
        name: "ROUTER",
        description: "Default gateway IP address(es)",
        value_hint: "Comma-separated IP addresses",
        example: "192.168.1.1",
    },
    OptionDefinition {
        code: 6,
        name: "DNS_SERVERS",
        description: "DNS server addresses",
        value_hint: "Comma-separated IP addresses",
        example: "8.8.8.8,8.8.4.4,1.1.1.1",
    },
    OptionDefinition {
        code: 12,
        name: "HOSTNAME",
        description: "Host name for the client",
        value_hint: "String (hostname)",
        example: "workstation-01",
    },
    OptionDefinition {
        code: 15,
        name: "DOMAIN_NAME",
        description: "Domain name for the client",
        value_hint: "String (domain format)",
        example: "example.com",
    },
    OptionDefinition {
        code: 28,
        name: "BROADCAST_ADDRESS",
        description: "Broadcast address for the subnet",
        value_hint: "IP address format",
        example: "192.168.1.255",
    },
    OptionDefinition {
        code: 42,
        name: "NTP_SERVERS",
        description: "Network Time Protocol servers",
        value_hint: "Comma-separated hostnames or IPs",
        example: "pool.ntp.org,time.google.com",
    },
    OptionDefinition {
        code: 44,
        name: "NETBIOS_NAME_SERVERS",
        description: "NetBIOS over TCP/IP name servers",
        value_hint: "Comma-separated IP addresses",
        example: "192.168.1.10,192.168.1.11",
    },
    OptionDefinition {
        code: 46,
        name: "NETBIOS_NODE_TYPE",
        description: "NetBIOS over TCP/IP node type",
        value_hint: "1=B-node, 2=P-node, 4=M-node, 8=H-node",
        example: "8",
    },
    OptionDefinition {
        code: 51,
        name: "IP_ADDRESS_LEASE_TIME",
        description: "Lease time in seconds",
        value_hint: "Number (seconds)",
        example: "86400",
    },
    OptionDefinition {
        code: 53,
        name: "DHCP_MESSAGE_TYPE",
        description: "DHCP message type",
        value_hint: "1=DISCOVER, 2=OFFER, 3=REQUEST, 5=ACK, 6=NAK",
        example: "1",
    },
    OptionDefinition {
        code: 54,
        name: "SERVER_IDENTIFIER",
        description: "DHCP server identifier",
        value_hint: "IP address",
        example: "192.168.1.1",
    },
    OptionDefinition {
        code: 58,
        name: "RENEWAL_TIME",
        description: "Time until client tries to renew (seconds)",
        value_hint: "Number (seconds)",
        example: "43200",
    },
    OptionDefinition {
        code: 59,
        name: "REBINDING_TIME",
        description: "Time until client tries to rebind (seconds)",
        value_hint: "Number (seconds)",
        example: "75600",
    },
    OptionDefinition {
        code: 66,
        name: "TFTP_SERVER_NAME",
        description: "TFTP server name for boot files",
        value_hint: "String (hostname or IP)",
        example: "tftp.example.com",
    },
    OptionDefinition {
        code: 67,
        name: "BOOTFILE_NAME",
        description: "Boot file name for network boot",
        value_hint: "String (file path)",
        example: "pxelinux.0",
    },
    OptionDefinition {
        code: 69,
        name: "SMTP_SERVERS",
        description: "SMTP server addresses",
        value_hint: "Comma-separated IP addresses",
        example: "192.168.1.25,192.168.1.26",
    },
    OptionDefinition {
        code: 70,
        name: "POP3_SERVERS",
        description: "POP3 server addresses",
        value_hint: "Comma-separated IP addresses",
        example: "192.168.1.30",
    },
    OptionDefinition {
        code: 119,
        name: "DOMAIN_SEARCH",
        description: "Domain search list",
        value_hint: "Comma-separated domain names",
        example: "example.com,local.example.com",
    },
    OptionDefinition {
        code: 121,
        name: "CLASSLESS_STATIC_ROUTES",
        description: "Classless static route option",
        value_hint: "Complex format (see RFC 3442)",
        example: "192.168.2.0/24,192.168.1.1",
    },
    OptionDefinition {
        code: 150,
        name: "TFTP_SERVER_ADDRESS",
        description: "TFTP server IP address (Cisco)",
        value_hint: "IP address",
        example: "192.168.1.100",
    },
    OptionDefinition {
        code: 252,
        name: "WPAD",
        description: "Web Proxy Auto-Discovery",
        value_hint: "URL",
        example: "http://proxy.example.com/wpad.dat",
    },
];

/// Look up a definition by numeric option code.
pub fn definition_for_code(code: u16) -> Option<&'static OptionDefinition> {
    STANDARD_OPTIONS.iter().find(|def| def.code == code)
}

/// Look up a definition by canonical name, case-insensitively.
pub fn definition_for_name(name: &str) -> Option<&'static OptionDefinition> {
    STANDARD_OPTIONS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name))
}
