//! Shodan: internet-wide host and service search.

use soar_core::{ActionDescriptor, ParamSpec};

use crate::catalog::Integration;

pub static INTEGRATION: Integration = Integration {
    name: "Shodan",
    category: "Threat Intelligence",
    actions: ACTIONS,
};

const ACTIONS: &[ActionDescriptor] = &[
    ActionDescriptor {
        integration: "Shodan",
        name: "Search",
        description: "Search the SHODAN database.",
        params: &[
            ParamSpec::string(
                "Search Query",
                "Search query; identical syntax to the website. e.g. find Apache webservers \
                located in Germany(apache country:'DE', city:'Berlin')",
            )
            .required(),
            ParamSpec::string(
                "Facets",
                "A comma-separated list of properties to get summary information on. Property \
                names can also be in the format of 'property:count'. (i.e. country:100, city:5). \
                More information can be found at https://developer.shodan.io/api",
            ),
            ParamSpec::boolean(
                "Set Minify",
                "Whether to minify the banner and only return the important data",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "Get Ip Info",
        description: "Get all available information on an IP",
        params: &[
            ParamSpec::boolean(
                "Return Historical Banners",
                "True if all historical banners should be returned",
            ),
            ParamSpec::boolean(
                "Set Minify",
                "True to only return the list of ports and the general host information, no \
                banners.",
            ),
        ],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "Scan A Network",
        description: "Scan a network using Shodan",
        params: &[],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "DNS Resolve",
        description: "Look up the IP address for the provided list of hostnames.",
        params: &[],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "Get Api Info",
        description: "Returns information about the API plan belonging to the given API key.",
        params: &[],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "Ping",
        description: "Test connectivity",
        params: &[],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "DNS Reverse",
        description: "Look up the hostnames that have been defined for the given list of IP \
            addresses",
        params: &[],
    },
    ActionDescriptor {
        integration: "Shodan",
        name: "SearchForExploits",
        description: "Search across a variety of data sources for exploits and use facets to get \
            summary information.",
        params: &[
            ParamSpec::string(
                "Search Query",
                "Search query used to search the database of known exploits.",
            )
            .required(),
            ParamSpec::string(
                "Facets",
                "A comma-separated list of properties to get summary information on. (i.e. port, \
                source, author). More information can be found at \
                https://developer.shodan.io/api",
            ),
            ParamSpec::string("Page", "The page number to page through results 100 at a time."),
        ],
    },
];
