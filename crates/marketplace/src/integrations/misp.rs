//! MISP: events, attributes, tags and sightings.

use soar_core::{ActionDescriptor, ParamSpec};

use crate::catalog::Integration;

pub static INTEGRATION: Integration = Integration {
    name: "MISP",
    category: "Threat Intelligence",
    actions: ACTIONS,
};

const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        integration: "MISP",
        name: "Create network-connection Misp Object",
        description: "Create a network-connection Object in MISP. Requires one of: Dst-port, \
            Src-port, IP-Src, IP-Dst to be provided or “Use Entities“ parameter set to true.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event to which you want to add network-connection \
                objects.",
            )
            .required(),
            ParamSpec::string(
                "Dst-port",
                "Specify the destination port, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Src-port",
                "Specify the source port, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Hostname-src",
                "Specify the source hostname, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Hostname-dst",
                "Specify the source destination, which you want to add to the event.",
            ),
            ParamSpec::string(
                "IP-Src",
                "Specify the source IP, which you want to add to the event.",
            ),
            ParamSpec::string(
                "IP-Dst",
                "Specify the destination IP, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Layer3-protocol",
                "Specify the related layer 3 protocol, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Layer4-protocol",
                "Specify the related layer 4 protocol, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Layer7-protocol",
                "Specify the related layer 7 protocol, which you want to add to the event.",
            ),
            ParamSpec::boolean(
                "Use Entities",
                "If enabled, action will use entities in order to create objects. Supported \
                entities: IP Address. “Use Entities“ has priority over other parameters.",
            ),
            ParamSpec::choices(
                "IP Type",
                "Specify what attribute type should be used with IP entities.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "List Event Objects",
        description: "Retrieve information about available objects in MISP event.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify a comma-separated list of IDs and UUIDs of the events, for which you \
                want to retrieve details.",
            )
            .required(),
            ParamSpec::string("Max Objects to Return", "Specify how many objects to return."),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Unpublish Event",
        description: "The action allows the user to unpublish an event. Unpublishing an event \
            prevents it from being visible to the shared groups.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event that you want to unpublish.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Create Event",
        description: "Create a new event in MISP.",
        params: &[
            ParamSpec::string("Event Name", "Specify the name for the new event.").required(),
            ParamSpec::string(
                "Distribution",
                "Specify the distribution of the event. Possible values: 0 - Organisation, 1 - \
                Community, 2 - Connected, 3 - All. You can either provide a number or a string.",
            ),
            ParamSpec::string(
                "Threat Level",
                "Specify the threat level of the event. Possible values: 1 - High, 2 - Medium, 3 \
                - Low, 4 - Undefined. You can either provide a number or a string.",
            ),
            ParamSpec::string(
                "Analysis",
                "Specify the analysis of the event. Possible values: 0 - Initial, 1 - Ongoing, 2 \
                - Completed. You can either provide a number or a string.",
            ),
            ParamSpec::boolean(
                "Publish",
                "If enabled, action will publish the event to the community.",
            ),
            ParamSpec::string("Comment", "Specify additional comments related to the event."),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Remove Tag from an Attribute",
        description: "Remove tags from attributes in MISP.",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers from which you want to \
                remove tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to search for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“ or \
                Object UUID is provided.",
            ),
            ParamSpec::string(
                "Tag Name",
                "Specify a comma-separated list of tags that you want to remove from attributes.",
            )
            .required(),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                remove tags from attributes that have matching category. If nothing is \
                specified, action will ignore categories in attributes. Possible values: \
                External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only remove tags from attributes that have matching attribute type. If nothing \
                is specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::string(
                "Object UUID",
                "Specify the UUID of the object that contains the desired attribute.",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs from which you want to remove \
                new tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and remove tags from all attributes that \
                match our criteria.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Ping",
        description: "Test Connectivity",
        params: &[],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Set IDS Flag for an Attribute",
        description: "Set IDS flag for attributes in MISP",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers for which you want to \
                set an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are \
                specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to seach for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                set IDS flag for attributes that have matching category. If nothing is \
                specified, action will ignore categories in attributes. Possible values: \
                External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only set IDS flag for attributes that have matching attribute type. If nothing \
                is specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and set IDS flag for all attributes that \
                match our criteria.",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs for which you want to set an \
                IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Get Event Details",
        description: "Retrieve details about events in MISP.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify a comma-separated list of IDs or UUIDs of the events for which you want \
                retrieve details.",
            )
            .required(),
            ParamSpec::boolean(
                "Return Attributes Info",
                "If enabled, action will create a case wall table for all of the attributes that \
                are a part of the event.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Add Tag to an Event",
        description: "Add tags to event in MISP.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, for which you want to add tags.",
            )
            .required(),
            ParamSpec::string(
                "Tag Name",
                "Specify a comma-separated list of tags that you want to add to events.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Remove Tag from an Event",
        description: "Remove tags from event in MISP.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, from which you want to remove tags.",
            )
            .required(),
            ParamSpec::string(
                "Tag Name",
                "Specify a comma-separated list of tags that you want to remove from events.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Delete an Event",
        description: "Delete event in MISP",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event that you want to delete.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Create IP-Port Misp Object",
        description: "Create a IP-Port Object in MISP. Requires one of: Dst-port, Src-port, \
            Domain, HOSTNAME, IP-Src, IP-Dst to be provided or “Use Entities“ parameter set to \
            true.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event to which you want to add IP-Port objects.",
            )
            .required(),
            ParamSpec::string(
                "Dst-port",
                "Specify the destination port, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Src-port",
                "Specify the source port, which you want to add to the event.",
            ),
            ParamSpec::string("Domain", "Specify the domain, which you want to add to the event."),
            ParamSpec::string(
                "HOSTNAME",
                "Specify the hostname, which you want to add to the event.",
            ),
            ParamSpec::string(
                "IP-Src",
                "Specify the source IP, which you want to add to the event.",
            ),
            ParamSpec::string(
                "IP-Dst",
                "Specify the destination IP, which you want to add to the event.",
            ),
            ParamSpec::boolean(
                "Use Entities",
                "If enabled, action will use entities in order to create objects. Supported \
                entities: IP Address. “Use Entities“ has priority over other parameters.",
            ),
            ParamSpec::choices(
                "IP Type",
                "Specify what attribute type should be used with IP entities.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Create Virustotal-Report Object",
        description: "Create a Virustotal-Report Object in MISP.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event to which you want to add URL objects.",
            )
            .required(),
            ParamSpec::string(
                "Permalink",
                "Specify the link to the VirusTotal report, which you want to add to the event.",
            )
            .required(),
            ParamSpec::string(
                "Comment",
                "Specify the comment, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Detection Ratio",
                "Specify the detection ration, which you want to add to the event.",
            ),
            ParamSpec::string(
                "Community Score",
                "Specify the community score, which you want to add to the event.",
            ),
            ParamSpec::string(
                "First Submission",
                "Specify first submission of the event. Format: 2020-12-22T13:07:32Z",
            ),
            ParamSpec::string(
                "Last Submission",
                "Specify last submission of the event. Format: 2020-12-22T13:07:32Z",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Add Sighting to an Attribute",
        description: "Add a sighting to attributes in MISP",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers to which you want to \
                add a new sighting. Note: If both “Attribute Name“ and “Attribute UUID“ are \
                specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to search for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                add sightings to attributes that have matching category. If nothing is \
                specified, action will ignore categories in attributes. Possible values: \
                External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only add sightings to attributes that have matching attribute type. If nothing \
                is specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::choices("Sightings Type", "Specify the type of the Sighting.").required(),
            ParamSpec::string(
                "Source",
                "Specify the source for the sighting. Example: SIEM, SOAR, Siemplify.",
            ),
            ParamSpec::string(
                "Date Time",
                "Specify the date time for the sighting. Format: 2020-02-10 11:00:00.",
            ),
            ParamSpec::string(
                "Object UUID",
                "Specify the uuid of the object that contains the desired attribute",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and add sighting for all attributes that \
                match our criteria.",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs to which you want to add a \
                new sighting. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Enrich Entities",
        description: "Enrich entities based on the attributes in MISP.",
        params: &[
            ParamSpec::string(
                "Number of attributes to return",
                "Specify how many attributes to return for entities.",
            )
            .required(),
            ParamSpec::choices(
                "Filtering condition",
                "Specify the filtering condition for the action. If “Last“ is selected, action \
                will use the oldest attribute for enrichment, if “First“ is selected, action \
                will use the newest attribute for enrichment.",
            )
            .required(),
            ParamSpec::boolean(
                "Create Insights",
                "If enabled, action will generate an insight for every entity that was fully \
                processed.",
            ),
            ParamSpec::choices(
                "Threat Level Threshold",
                "Specify what should be the threshold for the threat level of the event, where \
                the entity was found. If related event exceeds or matches threshold, entity will \
                be marked as suspicious.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Create Url Misp Object",
        description: "Create a URL Object in MISP. Requires “URL” to be provided or “Use \
            Entities“ parameter set to true.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event to which you want to add URL objects.",
            )
            .required(),
            ParamSpec::string("URL", "Specify the URL, which you want to add to the event."),
            ParamSpec::string("Port", "Specify the port, which you want to add to the event."),
            ParamSpec::string(
                "First seen",
                "Specify, when the URL was first seen. Format: 2020-12-22T13:07:32Z",
            ),
            ParamSpec::string(
                "Last seen",
                "Specify, when the URL was last seen. Format: 2020-12-22T13:07:32Z",
            ),
            ParamSpec::string("Domain", "Specify the domain, which you want to add to the event."),
            ParamSpec::string(
                "Text",
                "Specify the additional text, which you want to add to the event.",
            ),
            ParamSpec::string("IP", "Specify the IP, which you want to add to the event."),
            ParamSpec::string("Host", "Specify the Host, which you want to add to the event."),
            ParamSpec::boolean(
                "Use Entities",
                "If enabled, action will use entities in order to create objects. Supported \
                entities: URL. “Use Entities“ has priority over other parameters.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Download File",
        description: "Download files related to event in MISP.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event from which you want to download files",
            ),
            ParamSpec::string(
                "Download Folder Path",
                "Specify the absolute path to the folder, which should store files. If nothing \
                is specified, action will create an attachment instead. Note: JSON result is \
                only available, when you provide proper value for this parameter.",
            ),
            ParamSpec::boolean("Overwrite", "If enabled, action will overwrite existing files."),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Unset IDS Flag for an Attribute",
        description: "Unset IDS flag for attributes in MISP",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers for which you want to \
                unset an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are \
                specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to seach for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                unset IDS flag for attributes that have matching category. If nothing is \
                specified, action will ignore categories in attributes. Possible values: \
                External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only unset IDS flag for attributes that have matching attribute type. If nothing \
                is specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and unset IDS flag for all attributes \
                that match our criteria.",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs for which you want to unset \
                an IDS flag. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Upload File",
        description: "Upload a file to a MISP event.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event to which you want to upload this file.",
            )
            .required(),
            ParamSpec::string(
                "File Path",
                "Specify a comma-separated list of absolute filepaths of the files that you want \
                to upload to MISP.",
            )
            .required(),
            ParamSpec::string(
                "Category",
                "Specify the category for the uploaded file. Possible values: External Analysis, \
                Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Distribution",
                "Specify the distribution for the uploaded file. Possible values: 0 - \
                Organisation, 1 - Community, 2 - Connected, 3 - All. You can either provide a \
                number or a string.",
            ),
            ParamSpec::boolean(
                "For Intrusion Detection System",
                "If enabled, uploaded file will be used for intrusion detection systems.",
            )
            .required(),
            ParamSpec::string(
                "Comment",
                "Specify additional comments related to the uploaded file.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Add Attribute",
        description: "Add attributes based on entities to the event in MISP. Supported hashes: \
            MD5, SHA1, SHA224, SHA256, SHA384, SHA512, SSDeep.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "TheSpecify the ID or UUID of the event, for which you want to add attributes.",
            )
            .required(),
            ParamSpec::string(
                "Category",
                "Specify the category for attributes. Possible values: Targeting data, Payload \
                delivery, Artifacts dropped, Payload installation, Persistence mechanism, \
                Network activity, Attribution, External analysis, Social network.",
            ),
            ParamSpec::string(
                "Distribution",
                "Specify the distribution of the attribute. Possible values: 0 - Organisation, 1 \
                - Community, 2 - Connected, 3 - All, 5 - Inherit. You can either provide a \
                number or a string.",
            ),
            ParamSpec::boolean(
                "For Intrusion Detection System",
                "If enabled, attribute will be labeled as eligible to create an IDS signature \
                out of it.",
            )
            .required(),
            ParamSpec::string("Comment", "Specify comment related to attribute."),
            ParamSpec::choices(
                "Fallback IP Type",
                "Specify what should be the fallback attribute type for the IP address entity.",
            ),
            ParamSpec::choices(
                "Fallback Email Type",
                "Specify what should be the fallback attribute type for the email address entity.",
            ),
            ParamSpec::boolean(
                "Extract Domain",
                "If enabled, action will extract domain out of URL entity.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Add Tag to an Attribute",
        description: "Add tags to attributes in MISP.",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers to which you want to \
                add tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to search for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“ or \
                Object UUID is provided.",
            ),
            ParamSpec::string(
                "Tag Name",
                "Specify a comma-separated list of tags that you want to add to attributes.",
            )
            .required(),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                add tags to attributes that have matching category. If nothing is specified, \
                action will ignore categories in attributes. Possible values: External Analysis, \
                Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only add tags to attributes that have matching attribute type. If nothing is \
                specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::string(
                "Object UUID",
                "Specify the uuid of the object that contains the desired attribute.",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs to which you want to add new \
                tags. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action \
                will work with “Attribute UUID“ values.",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and add sighting for all attributes that \
                match our criteria.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Create File Misp Object",
        description: "Create a File Object in MISP. Requires one of: FILENAME, MD5, SHA1, \
            SHA256, SSDEEP to be provided or “Use Entities“ parameter set to true.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event for which you want to add file objects.",
            )
            .required(),
            ParamSpec::string(
                "FILENAME",
                "Specify the name of the file, which you want to add to the event.",
            ),
            ParamSpec::string(
                "MD5",
                "Specify the md5 of the file, which you want to add to the event.",
            ),
            ParamSpec::string(
                "SHA1",
                "Specify the sha1 of the file, which you want to add to the event.",
            ),
            ParamSpec::string(
                "SHA256",
                "Specify the sha256 of the file, which you want to add to the event.",
            ),
            ParamSpec::string(
                "SSDEEP",
                "Specify the ssdeep of the file, which you want to add to the event. Format: \
                size:hash:hash",
            ),
            ParamSpec::boolean(
                "Use Entities",
                "If enabled, action will use entities in order to create objects. Supported \
                entities: File name and hash. “Use Entities“ has priority over other parameters.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Get Related Events",
        description: "Retrieve information about events that are related to entities in MISP.",
        params: &[
            ParamSpec::string(
                "Events Limit",
                "Specify max amount of events to fetch. If not specified, all events will be \
                fetched.",
            ),
            ParamSpec::boolean(
                "Mark As Suspicious",
                "If enabled, action will mark entity as suspicious, if there is at least one \
                related event to it.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Publish Event",
        description: "The action allows the user to publish an event. Publishing an event shares \
            it to the sharing group selected, making it visible to all members.",
        params: &[
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event that you want to publish.",
            )
            .required(),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "List Sightings of an Attribute",
        description: "List available sightings for attributes in MISP",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers for which you want to \
                list sightings. Note: If both “Attribute Name“ and “Attribute UUID“ are \
                specified, action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to seach for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“.",
            ),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                list sightings for attributes that have matching category. If nothing is \
                specified, action will ignore categories in attributes. Possible values: \
                External Analysis, Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only list sightings for attributes that have matching attribute type. If nothing \
                is specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and list sightings for all attributes \
                that match our criteria.",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs for which you want to list \
                sightings. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "MISP",
        name: "Delete an Attribute",
        description: "Delete attributes in MISP. Supported hashes: MD5, SHA1, SHA224, SHA256, \
            SHA384, SHA512, SSDeep.",
        params: &[
            ParamSpec::string(
                "Attribute Name",
                "Specify a comma-separated list of attribute identifiers that you want to \
                delete. Note: If both “Attribute Name“ and “Attribute UUID“ are specified, \
                action will work with “Attribute UUID“ values.",
            ),
            ParamSpec::string(
                "Event ID",
                "Specify the ID or UUID of the event, where to search for attributes. This \
                parameter is required, if “Attribute Search“ is set to “Provided Event“ or \
                Object UUID is provided.",
            ),
            ParamSpec::string(
                "Category",
                "Specify a comma-separated list of categories. If specified, action will only \
                delete attributes that have matching category. If nothing is specified, action \
                will ignore categories in attributes. Possible values: External Analysis, \
                Payload Delivery, Artifacts Dropped, Payload Installation.",
            ),
            ParamSpec::string(
                "Type",
                "Specify a comma-separated list of attribute types. If specified, action will \
                only delete attributes that have matching attribute type. If nothing is \
                specified, action will ignore types in attributes. Example values: md5, sha1, \
                ip-src, ip-dst",
            ),
            ParamSpec::string(
                "Object UUID",
                "Specify the uuid of the object that contains the desired attribute",
            ),
            ParamSpec::string(
                "Attribute UUID",
                "Specify a comma-separated list of attribute UUIDs that you want to delete. \
                Note: If both “Attribute Name“ and “Attribute UUID“ are specified, action will \
                work with “Attribute UUID“ values.",
            ),
            ParamSpec::choices(
                "Attribute Search",
                "Specify, where action should search for attributes. If “Provided Event“ is \
                selected, action will only search for attributes or attribute UUIDs in event \
                with ID/UUID provided in “Event ID“ parameter. If “All Events“, action will \
                search for attributes among all events and delete all attributes that match our \
                criteria.",
            ),
        ],
    },
];
