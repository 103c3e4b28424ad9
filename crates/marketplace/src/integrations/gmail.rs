//! Gmail: mailbox search, labels, sending and forwarding.

use soar_core::{ActionDescriptor, ParamSpec};

use crate::catalog::Integration;

pub static INTEGRATION: Integration = Integration {
    name: "Gmail",
    category: "Email",
    actions: ACTIONS,
};

const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        integration: "Gmail",
        name: "Send Thread Reply",
        description: "Use the Send Thread Reply action to send a message as a reply to the email \
            thread. This action doesn’t run on Google SecOps entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for.",
            )
            .required(),
            ParamSpec::string(
                "Reply To",
                "A comma-separated list of emails to send the reply to. If you don’t provide any \
                value and the Reply All checkbox is clear, the action only sends a reply to the \
                original email sender. If you select the Reply All parameter, the action ignores \
                this parameter.",
            ),
            ParamSpec::boolean(
                "Reply All",
                "If selected, the action sends a reply to all recipients related to the original \
                email. Not selected by default. This parameter has a priority over the Reply To \
                parameter.",
            ),
            ParamSpec::string(
                "Attachments Paths",
                "A comma-separated string of paths for file attachments stored on the Google \
                SecOps server.",
            ),
            ParamSpec::email_content("Mail Content", "The body of an email.").required(),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Add Email Label",
        description: "Use the Add Email Label action to add a label to the specified email. \
            Adjust the action timeout in the Google SecOps IDE accordingly. This action doesn't \
            run on Google SecOps entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string(
                "Labels Filter",
                "A filter condition that specifies the email labels to search for. This \
                parameter accepts multiple values as a comma-separated string. You can search \
                for emails with specific labels, such as label1, label2. To search for emails \
                that don’t possess the specific label, use the following format: -label1. You \
                can configure this parameter to search for emails with and without specific \
                labels in one string, such as label1, -label2, label3.",
            ),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for. This parameter accepts \
                multiple values as a comma-separated string. If you provide the internet message \
                ID, the action ignores the Labels Filter, Subject Filter, Sender Filter, and \
                Time Frame (minutes) parameters.",
            ),
            ParamSpec::string(
                "Subject Filter",
                "A filter condition that specifies the email subject to search for. This filter \
                uses the “contains” logic and requires you to specify search items in full \
                words. This filter doesn’t support partial matches.",
            ),
            ParamSpec::string(
                "Sender Filter",
                "A filter condition that specifies the email sender to search for. This filter \
                uses the “equals” logic.",
            ),
            ParamSpec::string(
                "Time Frame (minutes)",
                "A filter condition that specifies the timeframe in minutes to search for emails.",
            ),
            ParamSpec::choices("Email Status", "A status of the email to search for."),
            ParamSpec::string(
                "Label",
                "A label to update the email with. This parameter accepts multiple values as a \
                comma-separated list. Action will create labels, if they don’t exist in the \
                mailbox.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Forward Email",
        description: "Use the Forward Email action to forward emails, including emails with \
            previous threads. This action doesn’t run on Google SecOps entities",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for.",
            )
            .required(),
            ParamSpec::string(
                "Send To",
                "A comma-separated list of email addresses for the email recipients, such as \
                user1@example.com, user2@example.com.",
            )
            .required(),
            ParamSpec::string(
                "CC",
                "A comma-separated string of email addresses for the carbon copy (CC) email \
                recipients, such as user1@example.com, user2@example.com.",
            ),
            ParamSpec::string(
                "BCC",
                "A comma-separated string of email addresses for the blind carbon copy (BCC) \
                email recipients, such as user1@example.com, user2@example.com.",
            ),
            ParamSpec::string("Subject", "A new subject for the email to forward.").required(),
            ParamSpec::string(
                "Attachments Paths",
                "A comma-separated string of paths for file attachments stored on the Google \
                SecOps server.",
            ),
            ParamSpec::email_content("Mail Content", "The body of an email.").required(),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Search For Emails",
        description: "Use the Search for Emails action to execute email search in a specified \
            mailbox using the provided search criteria. With appropriate permissions, this \
            action can run a search in other mailboxes. This action is asynchronous. Adjust the \
            action timeout in the Google SecOps IDE accordingly. This action doesn't run on \
            Google SecOps entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration. This \
                parameter accepts multiple values as a comma-separated string.",
            )
            .required(),
            ParamSpec::string(
                "Labels Filter",
                "A filter condition that specifies the email labels to search for. This \
                parameter accepts multiple values as a comma-separated string. You can search \
                for emails with specific labels, such as label1, label2. To search for emails \
                that don’t possess the specific label, use the following format: -label1. You \
                can configure this parameter to search for emails with and without specific \
                labels in one string, such as label1, -label2, label3.",
            ),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for. This parameter accepts \
                multiple values as a comma-separated string. If you provide the internet message \
                ID, the action ignores the Subject Filter, Sender Filter, Labels Filter, \
                Recipient Filter, Time Frame (minutes), and Email Status parameters.",
            ),
            ParamSpec::string(
                "Subject Filter",
                "A filter condition that specifies the email subject to search for.",
            ),
            ParamSpec::string(
                "Sender Filter",
                "A filter condition that specifies the email sender to search for.",
            ),
            ParamSpec::string(
                "Recipient Filter",
                "A filter condition that specifies the email recipient to search for.",
            ),
            ParamSpec::string(
                "Time Frame (minutes)",
                "A filter condition that specifies the timeframe in minutes to search for emails.",
            ),
            ParamSpec::choices("Email Status", "A status of the email to search for."),
            ParamSpec::string(
                "Headers To Return",
                "A comma-separated list of headers to return in the action output. The action \
                always returns the following headers: date, from, to, cc, bcc, in-reply-to, \
                reply-to, message-id and subject headers. If you don’t provide any value, the \
                action returns all headers.This parameter is case sensitive.",
            ),
            ParamSpec::boolean(
                "Return Email Body",
                "If selected, the action returns the full body content of an email in the action \
                output. If not selected, the information about the attachment names in the email \
                is unavailable",
            ),
            ParamSpec::string(
                "Max Emails To Return",
                "The maximum number of emails for the action to return.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Wait For Thread Reply",
        description: "Use the Wait For Thread Reply action to wait for the user's reply based on \
            an email sent using the Send Email action. This action is asynchronous. Adjust the \
            action timeout in the Google SecOps IDE accordingly. This action doesn't run on \
            Google SecOps entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to wait for a reply in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string(
                "Internet Message ID",
                "The internet message ID of an email for the action to wait for. If the message \
                was sent using the Send Email action, configure this parameter using the \
                following placeholder: SendEmail.JSONResult|message_id. To retrieve an internet \
                message ID, use the Search for Emails action.",
            )
            .required(),
            ParamSpec::boolean(
                "Wait for All Recipients to Reply",
                "If selected, the action waits for responses from all recipients until reaching \
                timeout. Not selected by default.",
            ),
            ParamSpec::boolean(
                "Fetch Response Attachments",
                "If selected and the recipient reply contains attachments, the action retrieves \
                email attachments and adds them as an attachment to the Case Wall in Google \
                SecOps. Not selected by default.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Remove Email Label",
        description: "Use the Remove Email Label action to remove a label from the specified \
            email. Adjust the action timeout in the Google SecOps IDE accordingly. This action \
            doesn't run on Google SecOps entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string(
                "Labels Filter",
                "A filter condition that specifies the email labels to search for. This \
                parameter accepts multiple values as a comma-separated string. You can search \
                for emails with specific labels, such as label1, label2. To search for emails \
                that don’t possess the specific label, use the following format: -label1. You \
                can configure this parameter to search for emails with and without specific \
                labels in one string, such as label1, -label2, label3.",
            ),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for. This parameter accepts \
                multiple values as a comma-separated string. If you provide the internet message \
                ID, the action ignores the Labels Filter, Subject Filter, Sender Filter, and \
                Time Frame (minutes) parameters.",
            ),
            ParamSpec::string(
                "Subject Filter",
                "A filter condition that specifies the email subject to search for. This filter \
                uses the “contains” logic and requires you to specify search items in full \
                words. This filter doesn’t support partial matches.",
            ),
            ParamSpec::string(
                "Sender Filter",
                "A filter condition that specifies the email sender to search for. This filter \
                uses the “equals” logic.",
            ),
            ParamSpec::string(
                "Time Frame (minutes)",
                "A filter condition that specifies the timeframe in minutes to search for emails.",
            ),
            ParamSpec::choices("Email Status", "A status of the email to search for."),
            ParamSpec::string(
                "Label",
                "A label to remove from an email. This parameter accepts multiple values as a \
                comma-separated list.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Ping",
        description: "Use the Ping action to test connectivity to Gmail.",
        params: &[],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Save Email To The Case",
        description: "Use the Save Email To The Case action to save email or email attachments \
            to the action Case Wall in Google SecOps. This action doesn’t run on Google SecOps \
            entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for.",
            )
            .required(),
            ParamSpec::boolean(
                "Save Only Email Attachments",
                "If selected, the action saves only attachments from the specified email. Not \
                selected by default.",
            ),
            ParamSpec::string(
                "Attachment To Save",
                "If you selected the “Save Only Email Attachments” parameter, the action only \
                saves attachments that this parameter specifies. This parameter accepts multiple \
                values as a comma-separated string.",
            ),
            ParamSpec::boolean(
                "Base64 Encode",
                "If selected, the action encodes the email file into a base64 format.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Send Email",
        description: "Use the Send Email action to send an email based on the provided \
            parameters. This action is not running on Google SecOps entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to send an email from, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration.",
            )
            .required(),
            ParamSpec::string("Subject", "The subject for an email to send.").required(),
            ParamSpec::string(
                "Send To",
                "A comma-separated string of email addresses for the email recipients, such as \
                user1@example.com, user2@example.com.",
            )
            .required(),
            ParamSpec::string(
                "CC",
                "A comma-separated string of email addresses for the carbon copy (CC) email \
                recipients, such as user1@example.com, user2@example.com.",
            ),
            ParamSpec::string(
                "BCC",
                "A comma-separated string of email addresses for the blind carbon copy (BCC) \
                email recipients, such as user1@example.com, user2@example.com.",
            ),
            ParamSpec::string(
                "Attachments Paths",
                "A comma-separated string of paths for file attachments stored on the Google \
                SecOps server.",
            ),
            ParamSpec::email_content("Mail Content", "The body of an email.").required(),
            ParamSpec::string(
                "Reply-To Recipients",
                "A comma-separated list of recipients to use in the “Reply-To” header. Use the \
                “Reply-To” header to redirect reply emails to the specific email address instead \
                of the sender address that is stated in the “From” field.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Gmail",
        name: "Delete Email",
        description: "Use the Delete Email action to delete one or multiple emails from the \
            mailbox based on the provided search criteria. By default, this action moves emails \
            to Trash. You can configure the action to delete emails forever instead of moving \
            them to Trash. The Delete Email action is asynchronous. Adjust the action timeout in \
            the Google SecOps IDE accordingly. This action doesn’t run on Google SecOps \
            entities.",
        params: &[
            ParamSpec::string(
                "Mailbox",
                "A mailbox to search the email in, such as user@example.com. By default, the \
                action uses the default mailbox that you configured for the integration. This \
                parameter accepts multiple values as a comma-separated string.",
            )
            .required(),
            ParamSpec::string(
                "Labels Filter",
                "A filter condition that specifies the email labels to search for. This \
                parameter accepts multiple values as a comma-separated string. You can search \
                for emails with specific labels, such as label1, label2. To search for emails \
                that don’t possess the specific label, use the following format: -label1. You \
                can configure this parameter to search for emails with and without specific \
                labels in one string, such as label1, -label2, label3.",
            ),
            ParamSpec::string(
                "Internet Message ID",
                "An internet message ID of the email to search for. This parameter accepts \
                multiple values as a comma-separated string. If you provide the internet message \
                ID, the action ignores the Subject Filter, Sender Filter, Labels Filter, and \
                Time Frame (minutes) parameters.",
            ),
            ParamSpec::string(
                "Subject Filter",
                "A filter condition that specifies the email subject to search for. This filter \
                uses the “contains” logic and requires you to specify search items in full \
                words. This filter doesn’t support partial matches.",
            ),
            ParamSpec::string(
                "Sender Filter",
                "A filter condition that specifies the email sender to search for. This filter \
                uses the “equals” logic.",
            ),
            ParamSpec::string(
                "Time Frame (minutes)",
                "A filter condition that specifies the timeframe in minutes to search for emails.",
            ),
            ParamSpec::choices("Email Status", "A status of the email to search for."),
            ParamSpec::boolean(
                "Move to Trash",
                "If selected, the action moves emails to Trash and doesn’t search through emails \
                with the Trash label unless you configure the Labels Filter parameter to include \
                the following label: Trash. If not selected, the action executes search across \
                the whole mailbox and deletes emails forever. Selected by default.",
            ),
        ],
    },
];
