//! Check Point firewall: address groups, URL blocking and SAM rules.

use soar_core::{ActionDescriptor, ParamSpec};

use crate::catalog::Integration;

pub static INTEGRATION: Integration = Integration {
    name: "CheckPointFirewall",
    category: "Firewall",
    actions: ACTIONS,
};

const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Run Script",
        description: "Run arbitrary script with CheckPoint run-script API call. Note: action is \
            not using Siemplify entities to operate.",
        params: &[
            ParamSpec::string(
                "Script text",
                "Script to execute. For example, fw sam command: fw sam -t 600 -I src 8.9.10.12",
            )
            .required(),
            ParamSpec::string(
                "Target",
                "Specify CheckPoint device to execute script on, for example: gaia80.10. \
                Parameter accepts multiple values as a comma separated list.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Add Url To Group",
        description: "Add Url to the Checkpoint FireWall Group",
        params: &[
            ParamSpec::string(
                "URLs Group Name",
                "Specify the name of the group to which you want to add URL.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Download Log Attachment",
        description: "Download log attachments from CheckPoint FireWall.",
        params: &[
            ParamSpec::string(
                "Log IDs",
                "Specify the comma-separated list of log IDs from which you want to download \
                attachments.",
            )
            .required(),
            ParamSpec::string(
                "Download Folder Path",
                "Specify the absolute path for the folder where the action should store the \
                attachments.",
            )
            .required(),
            ParamSpec::boolean(
                "Create Case Wall Attachment",
                "If enabled, action will create a case wall attachment for each successfully \
                downloaded file. Note: that attachment will only be created if it’s size is less \
                than 3 MB.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Add a SAM Rule",
        description: "Add a SAM (suspicious activity monitoring) rule for Checkpoint Firewall. \
            Please refer to the Checkpoint fw_sam command criteria section documentation for \
            available ip, netmask, port and protocol combinations - \
            https://sc1.checkpoint.com/documents/R80.40/WebAdminGuides/EN/CP_R80.40_CLI_ReferenceGuide/Content/Topics-CLIG/MDSG/fw-sam.htm",
        params: &[
            ParamSpec::string(
                "Security Gateway to Create SAM Rule on",
                "Specify the name of Security Gateway to create a rule for.",
            )
            .required(),
            ParamSpec::string("Source IP", "Specify the source IP to be added to the rule."),
            ParamSpec::string(
                "Source Netmask",
                "Specify the source netmask to be added to the rule.",
            ),
            ParamSpec::string(
                "Destination IP",
                "Specify the destination IP to be added to the rule.",
            ),
            ParamSpec::string(
                "Destination Netmask",
                "Specify the destination netmask to be added to the rule.",
            ),
            ParamSpec::string(
                "Port",
                "Specify the port number to be added to the rule for example, 5005",
            ),
            ParamSpec::string(
                "Protocol",
                "Specify the protocol name to be added to the rule for example, TCP",
            ),
            ParamSpec::string(
                "Expiration",
                "Specify how long in seconds the newly added SAM rule should be active for \
                example, 4. If nothing is specified - then the rule never expires.",
            ),
            ParamSpec::choices(
                "Action for the Matching Connections",
                "Specify the action that should be executed for the matching connections.",
            )
            .required(),
            ParamSpec::choices(
                "How to Track Matching Connections",
                "Specify how to track matching connections.",
            )
            .required(),
            ParamSpec::boolean(
                "Close Connections",
                "Specify if the existing matching connections should be closed.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Add Ip To Group",
        description: "Add IP to the Checkpoint FireWall Group",
        params: &[
            ParamSpec::string(
                "Blacklist Group Name",
                "Specify the name of the group to which you want to add IP address.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Ping",
        description: "Test Connectivity",
        params: &[],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "List Policies On Site",
        description: "Retrieve all existing policies",
        params: &[
            ParamSpec::string(
                "Max Policies To Return",
                "Specify how many policies to return in the response. Default: 50.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Remove SAM Rule",
        description: "Remove a SAM (suspicious activity monitoring) rule from Checkpoint \
            Firewall. Note: you need to match the current rule in order to remove it. Please \
            refer to the Checkpoint fw_sam command criteria section documentation for available \
            ip, netmask, port and protocol combinations - \
            https://sc1.checkpoint.com/documents/R81/WebAdminGuides/EN/CP_R81_CLI_ReferenceGuide/Topics-CLIG/MDSG/fw-sam.htm",
        params: &[
            ParamSpec::string(
                "Security Gateway",
                "Specify the name of Security Gateway from where to remove SAM Rule",
            )
            .required(),
            ParamSpec::string("Source IP", "Specify the source IP to be added to the rule."),
            ParamSpec::string(
                "Source Netmask",
                "Specify the source netmask to be added to the rule.",
            ),
            ParamSpec::string(
                "Destination IP",
                "Specify the destination IP to be added to the rule.",
            ),
            ParamSpec::string(
                "Destination Netmask",
                "Specify the destination netmask to be added to the rule.",
            ),
            ParamSpec::string(
                "Port",
                "Specify the port number to be added to the rule for example, 5005",
            ),
            ParamSpec::string(
                "Protocol",
                "Specify the protocol name to be added to the rule for example, TCP",
            ),
            ParamSpec::choices(
                "Action for the Matching Connections",
                "Specify the action that should be executed for the matching connections.",
            )
            .required(),
            ParamSpec::choices(
                "How to Track Matching Connections",
                "Specify how to track matching connections.",
            )
            .required(),
            ParamSpec::boolean(
                "Close Connections",
                "Specify if the existing matching connections should be closed.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Show Logs",
        description: "Retrieve logs from CheckPoint FireWall based on the filter.",
        params: &[
            ParamSpec::string(
                "Query Filter",
                "Specify the query filter that will be used to return logs.",
            ),
            ParamSpec::choices(
                "Time Frame",
                "Specify what time frame should be used for log retrieval.",
            )
            .required(),
            ParamSpec::choices(
                "Log Type",
                "Specify what type of logs should be returned.",
            )
            .required(),
            ParamSpec::string(
                "Max Logs To Return",
                "Specify how many logs to return. Maximum is 100. This is Checkpoint FireWall \
                limitation.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Remove Url From Group",
        description: "Remove URL from the Checkpoint FireWall Group",
        params: &[
            ParamSpec::string(
                "URLs Group Name",
                "Specify the name of the group from which you want to remove URL.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "Remove IP From Group",
        description: "Remove IP from the Checkpoint FireWall Group",
        params: &[
            ParamSpec::string(
                "Blacklist Group Name",
                "Specify the name of the group from which you want to remove IP address.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "CheckPointFirewall",
        name: "List Layers On Site",
        description: "Retrieve all of the available Access Control and Threat Prevention layers",
        params: &[
            ParamSpec::string(
                "Max Layers To Return",
                "Specify how many layers to return in the response. Default: 50.",
            ),
        ],
    },
];
