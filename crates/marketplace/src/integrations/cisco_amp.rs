//! Cisco AMP for Endpoints: host isolation, file lists and enrichment.

use soar_core::{ActionDescriptor, ParamSpec};

use crate::catalog::Integration;

pub static INTEGRATION: Integration = Integration {
    name: "CiscoAMP",
    category: "Endpoint Security",
    actions: ACTIONS,
};

const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Computers By Network Activity (URL)",
        description: "Fetch a list of computers that have connected to the given hostname or URL",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Computers By Network Activity (Ip)",
        description: "Fetch a list of computers that have connected to the given IP address",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Add File To File List",
        description: "Add a SHA-256 for a specific file list",
        params: &[
            ParamSpec::string("File List Name", "File Blocklist").required(),
            ParamSpec::string("Description", "Description of the file").required(),
        ],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Unisolate Machine",
        description: "Stop isolation of Machine by connector guid.",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Groups",
        description: "Get group details",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Computers By File Hash",
        description: "Fetch a list of computers that have observed files with the given SHA-256 \
            value",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get File Lists By Policy",
        description: "Get the file lists that are assigned in a policy",
        params: &[
            ParamSpec::string("Policy Name", "The name of the policy e.g. Triage").required(),
        ],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Create Group",
        description: "Create a new group",
        params: &[
            ParamSpec::string("Group Name", "The name of the new group").required(),
            ParamSpec::string("Group Description", "The description of the new group").required(),
        ],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Computers By File Name",
        description: "Fetch a list of computers that have observed files with the given file name",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Ping",
        description: "Test connectivity to Cisco AMP.",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get File List Items",
        description: "Get the items listed in a given file list",
        params: &[
            ParamSpec::string("File List Name", "e.g. File Blocklist").required(),
        ],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Policies",
        description: "Get policy details",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Get Computer Info",
        description: "Get details about a computer",
        params: &[],
    },
    ActionDescriptor {
        integration: "CiscoAMP",
        name: "Isolate Machine",
        description: "Isolate Machine by connector guid.",
        params: &[],
    },
];
