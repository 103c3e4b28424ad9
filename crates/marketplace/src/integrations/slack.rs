//! Slack: channel messaging, user lookup and reply polling.

use soar_core::{ActionDescriptor, ParamSpec};

use crate::catalog::Integration;

pub static INTEGRATION: Integration = Integration {
    name: "Slack",
    category: "Chat",
    actions: ACTIONS,
};

const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        integration: "Slack",
        name: "Wait For Reply",
        description: "Wait for a thread reply to a message previously sent with a 'Send Message' \
            or 'Send Advanced Message' actions. Note: action is async, please adjust the timeout \
            for action in Siemplify IDE. Action is not running on Siemplify entities.",
        params: &[
            ParamSpec::string(
                "Channel",
                "Specify the channel name in which to track reply for the message. Note: if both \
                Channel and Channel ID are specified, action will only work with ID.",
            ),
            ParamSpec::string(
                "Channel ID",
                "Specify the id of the channel, in which to track reply for the message. Note: \
                if both Channel and Channel ID are specified, action will only work with ID.",
            ),
            ParamSpec::string(
                "Message Timestamp",
                "Specify the timestamp of the message to track. Timestamp can be found in the \
                Send Message action json result as ts key.",
            )
            .required(),
            ParamSpec::boolean(
                "Wait for Multiple Replies",
                "If enabled, action should wait for multiple responses  until action timeout. \
                Otherwise, action finishes running after getting first reply to the message.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Create Channel",
        description: "Create a channel in Slack. Note that action is not working on Siemplify \
            entities.",
        params: &[
            ParamSpec::string(
                "Channel Name",
                "Specify the name of the channel. Note: Channel names may only contain lowercase \
                letters, numbers, hyphens, and underscores, and must be 80 characters or less.",
            )
            .required(),
            ParamSpec::string(
                "User IDs",
                "Specify the ids of the users that should be invited to the newly created \
                channel. Example: U014JDHLW87, U08544ABC85. Parameter accepts multiple values as \
                a comma separated list. Note: if both “User IDs” and “User Emails” are \
                specified, action will only work with IDs.",
            ),
            ParamSpec::boolean("Is Private", "If enabled, action will create a private channel."),
            ParamSpec::string(
                "User Emails",
                "Specify the emails of users that should be invited to the newly created \
                channel. Parameter accepts multiple values as a comma separated list. Note: if \
                both “User IDs” and “User Emails” are specified, action will only work with IDs.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "List Channels",
        description: "Get a list of Slack channels based on the provided criteria. Note that \
            action is not working on Siemplify entities.",
        params: &[
            ParamSpec::string("Max Channels to Return", "Specify how many channels to return."),
            ParamSpec::string(
                "Type Filter",
                "Specify what type of conversations to return. Example: \
                public_channel,private_channel. Possible Values: public_channel, \
                private_channel, mpim, im.",
            ),
            ParamSpec::choices(
                "Filter Key",
                "Specify the key that needs to be used to filter channels.",
            ),
            ParamSpec::string(
                "Filter Value",
                "Specify what value should be used in the filter. If “Equal“ is selected, action \
                will try to find the exact match among results and if “Contains“ is selected, \
                action will try to find results that contain that substring. If nothing is \
                provided in this parameter, the filter will not be applied. Filtering logic is \
                working based on the value  provided in the “Filter Key” parameter.",
            ),
            ParamSpec::choices(
                "Filter Logic",
                "Specify what filter logic should be applied. Filtering logic is working based \
                on the value  provided in the “Filter Key” parameter.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Get Channel Or User Conversation History",
        description: "Get conversation history for a user or a channel based on provided input \
            criteria. Action works with either channel or user id, which could be searched with \
            either 'List Channels' or 'List User' actions. Note that action is not working on \
            Siemplify entities.",
        params: &[
            ParamSpec::string(
                "Channel or User ID",
                "Specify the channel or user id to fetch the conversation history for.",
            )
            .required(),
            ParamSpec::choices(
                "Time Frame",
                "Specify a time frame for the results. If Custom is selected, you also need to \
                provide Start Time.",
            ),
            ParamSpec::string(
                "Start Time",
                "Specify the start time for the results. This parameter is mandatory, if Custom \
                is selected for the Time Frame parameter. 'Format: ISO 8601. Example: \
                2021-08-05T05:18:42Z'",
            ),
            ParamSpec::string(
                "End Time",
                "Specify the end time for the results. 'Format: ISO 8601. Example: \
                2021-08-05T05:18:42Z'. If nothing is provided and Custom is selected for the \
                Time Frame parameter then this parameter will use current time.",
            ),
            ParamSpec::string(
                "Max Records to Return",
                "Specify how many records to return. If nothing is provided, action will return \
                20 records.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Get User Details By Id",
        description: "Fetch Slack user account details. Note that action is not working on \
            Siemplify entities.",
        params: &[
            ParamSpec::string(
                "User Id",
                "Specify user account id to fetch details for. User ID can be found by running \
                “List Users“ action.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Wait For Reply With Webhook",
        description: "Wait for a User reply to a message sent with a webhook - action \
            periodically check the provided webhook to see if the User had provided any reply to \
            it. Action can be used with the 'Send Advanced Message' action, if the block message \
            with webhook was sent, to check if the user's response was provided to the webhook. \
            Note: action is async, please adjust the timeout for action in Siemplify IDE. Action \
            is not running on Siemplify entities.",
        params: &[
            ParamSpec::string(
                "Webhook Token UUID",
                "Specify the Webhook token UUID to monitor for the user’s response.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Ping",
        description: "Test connectivity to the Slack instance with parameters provided at the \
            integration configuration page on the Marketplace tab.",
        params: &[],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Get User Details",
        description: "Get Slack user details based on provided input criteria. Note: that action \
            is not working on Siemplify entities.",
        params: &[
            ParamSpec::choices(
                "Search By",
                "Specify the parameter to search user details by.",
            )
            .required(),
            ParamSpec::string("User Value", "Specify the user value to search by.").required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Ask Question",
        description: "Ask question in Slack. Note: this action will be deprecated in the future \
            integration's versions and replaced with actions providing enhanced functionality.",
        params: &[
            ParamSpec::string("Channel", "Target channel.").required(),
            ParamSpec::string("Question", "Question content.").required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Send Advanced Message",
        description: "Send an advanced message to a Slack channel or user. Action provides an \
            ability to send 'simple' text messages and 'rich' Slack block messages with buttons, \
            advanced formatting and more. Please see https://api.slack.com/block-kit for the \
            block messages reference. Note that action is not working on Siemplify entities. \
            This action can be used together with the 'Wait for Reply With Webhook' action to \
            first send a 'block' message with a webhook to a user, and when later with 'Wait for \
            Reply With Webhook' action check for a user's response.",
        params: &[
            ParamSpec::string(
                "Recipient",
                "Specify the recipient to send a message to.",
            )
            .required(),
            ParamSpec::choices(
                "Recipient Type",
                "Specify channel or user name (full name) to send message to. Optionally channel \
                or user id can be specified, or email address of a user.",
            )
            .required(),
            ParamSpec::string("Message", "Specify the message content to send.").required(),
            ParamSpec::choices("Message Type", "Specify the message type to send.").required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Rename Channel",
        description: "Rename the specified Slack channel. Note that action is not working on \
            Siemplify entities.",
        params: &[
            ParamSpec::string(
                "Channel Name",
                "Specify the name of the channel, which you want to rename. Note: if both \
                “Channel Name” and “Channel ID” are specified, action will only work with ID.",
            ),
            ParamSpec::string(
                "Channel ID",
                "Specify the id of the channel, which you want to rename. Note: if both “Channel \
                Name” and “Channel ID” are specified, action will only work with ID.",
            ),
            ParamSpec::string(
                "New Name",
                "Specify what should be a new name for the channel. Note: Channel names may only \
                contain lowercase letters, numbers, hyphens, and underscores, and must be 80 \
                characters or less.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Upload File",
        description: "Add files to Slack and share them with your teammates to help you \
            collaborate. Uploaded files are stored, searchable, and shareable across your \
            workspace. Note that action is not working on Siemplify entities.",
        params: &[
            ParamSpec::string(
                "File Name",
                "Specify the name(title) that should be used to show in Slack for the uploaded \
                file.",
            )
            .required(),
            ParamSpec::string(
                "File Path",
                "Specify the full file path on the Siemplify server for the file to upload.",
            )
            .required(),
            ParamSpec::string(
                "Channel",
                "Specify the name of the Slack channel or the email address of the user to whom \
                to send the message.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Send Interactive Message",
        description: "Send an interactive message to a channel or a user and when based on the \
            provided Webhook UUID check a user's response. Action is similar to the 'Send \
            Advanced Message' action, but it allows to send only 'block' content (not plain text \
            messages) and also requires a webhook UUID to check a user's response to a webhook. \
            Action is async, please adjust action timeout in IDE accordingly. Action is not \
            working on Siemplify entities. Please configure the Slack app used in integration to \
            allow interactive messages as described here - \
            https://api.slack.com/legacy/interactive-messages#readying_app.",
        params: &[
            ParamSpec::string(
                "Recipient",
                "Specify the recipient to send a message to.",
            )
            .required(),
            ParamSpec::choices(
                "Recipient Type",
                "Specify channel or user name (full name) to send message to. Optionally channel \
                or user id can be specified, or email address of a user.",
            )
            .required(),
            ParamSpec::string("Message", "Specify the message content to send.").required(),
            ParamSpec::string(
                "Webhook Token UUID",
                "Specify the Webhook token UUID to monitor for the user’s response.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Build Block",
        description: "Build a slack message block based on provided input criteria. Action \
            creates a block with a webhook that can be later passed to the 'Send Interactive \
            Message' to send a message with. Note that action is not working on Siemplify \
            entities.",
        params: &[
            ParamSpec::string(
                "Question",
                "Specify the question text to add to the block.",
            )
            .required(),
            ParamSpec::string(
                "Answers Buttons",
                "Specify the answer buttons to add to the block.",
            )
            .required(),
            ParamSpec::string(
                "Siemplify Base URL",
                "Specify the Siemplify server base url to add to the block.",
            )
            .required(),
            ParamSpec::string(
                "Webhook Token UUID",
                "Specify the Webhook token UUID to monitor for the user’s response.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "Send Message",
        description: "Send a message to a Slack channel or user. Note that action is not working \
            on Siemplify entities.",
        params: &[
            ParamSpec::string(
                "Channel",
                "Specify the name of the Slack channel or the email address of the user to whom \
                to send the message. Parameter accepts multiple values as a comma-separated \
                string.",
            )
            .required(),
            ParamSpec::string("Message", "Specify the message content to send.").required(),
        ],
    },
    ActionDescriptor {
        integration: "Slack",
        name: "List Users",
        description: "Get a list of Slack users based on the provided criteria. Note that action \
            is not working on Siemplify entities.",
        params: &[
            ParamSpec::string("Max Records to Return", "Specify how many user accounts to return."),
            ParamSpec::choices(
                "Filter Key",
                "Specify the key that needs to be used to filter user accounts.",
            ),
            ParamSpec::string(
                "Filter Value",
                "Specify what value should be used in the filter. If “Equal“ is selected, action \
                will try to find the exact match among results and if “Contains“ is selected, \
                action will try to find results that contain that substring. If nothing is \
                provided in this parameter, the filter will not be applied. Filtering logic is \
                working based on the value  provided in the “Filter Key” parameter.",
            ),
            ParamSpec::choices(
                "Filter Logic",
                "Specify what filter logic should be applied. Filtering logic is working based \
                on the value  provided in the “Filter Key” parameter.",
            ),
        ],
    },
];
