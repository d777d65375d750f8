// file: src/dispatch/groups.rs
// version: 1.0.0
// guid: 8f2a4c6e-0b3d-4f5a-a7c9-3e5b7d9f1a2c

//! Documented hammer command groups

/// Static description of one command group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    pub base: &'static str,
    pub about: &'static str,
    pub subcommands: &'static [(&'static str, &'static str)],
}

const CRUD_CREATE: (&str, &str) = ("create", "Create a record.");
const CRUD_INFO: (&str, &str) = ("info", "Show a record.");
const CRUD_LIST: (&str, &str) = ("list", "List all records.");
const CRUD_UPDATE: (&str, &str) = ("update", "Update a record.");
const CRUD_DELETE: (&str, &str) = ("delete", "Delete a record.");

/// Every group registered by default, sorted by base name
pub const CATALOGUE: &[GroupSpec] = &[
    GroupSpec {
        base: "content-view",
        about: "Manipulate content views.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("publish", "Publish a content view."),
            ("remove-from-environment", "Remove a content view from an environment."),
            ("remove", "Remove versions and/or environments from a content view."),
            ("copy", "Copy a content view."),
            ("add-repository", "Associate a resource."),
            ("remove-repository", "Disassociate a resource."),
            ("version", "View and manage content view versions."),
            ("filter", "View and manage filters."),
            ("puppet-module", "View and manage puppet modules."),
        ],
    },
    GroupSpec {
        base: "environment",
        about: "Manipulate environments.",
        subcommands: &[
            ("create", "Create an environment."),
            ("info", "Show an environment."),
            ("list", "List all environments."),
            ("update", "Update an environment."),
            ("sc_params", "List all smart class parameters"),
            ("delete", "Delete an environment."),
        ],
    },
    GroupSpec {
        base: "file",
        about: "Manipulate files.",
        subcommands: &[CRUD_INFO, CRUD_LIST],
    },
    GroupSpec {
        base: "filter",
        about: "Manage permission filters.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("available-permissions", "List all permissions."),
            ("available-resources", "List available resource types."),
        ],
    },
    GroupSpec {
        base: "gpg",
        about: "Manipulate GPG key actions on the server.",
        subcommands: &[CRUD_CREATE, CRUD_INFO, CRUD_LIST, CRUD_UPDATE, CRUD_DELETE],
    },
    GroupSpec {
        base: "host",
        about: "Manipulate hosts.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("start", "Power a host on."),
            ("stop", "Power a host off."),
            ("reboot", "Reboot a host."),
            ("status", "Get status of host."),
            ("facts", "List all fact values."),
            ("set-parameter", "Create or append a parameter for a host."),
            ("delete-parameter", "Delete parameter for a host."),
            ("errata", "Manage errata on your hosts."),
            ("package", "Manage packages on your hosts."),
            ("subscription", "Manage subscription information on your hosts."),
        ],
    },
    GroupSpec {
        base: "lifecycle-environment",
        about: "Manipulate lifecycle environments.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("paths", "List environment paths."),
        ],
    },
    GroupSpec {
        base: "location",
        about: "Manipulate locations.",
        subcommands: &[CRUD_CREATE, CRUD_INFO, CRUD_LIST, CRUD_UPDATE, CRUD_DELETE],
    },
    GroupSpec {
        base: "module-stream",
        about: "View module streams.",
        subcommands: &[CRUD_INFO, CRUD_LIST],
    },
    GroupSpec {
        base: "organization",
        about: "Manipulate organizations.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("add-user", "Associate a user."),
            ("remove-user", "Disassociate a user."),
            ("add-location", "Associate a location."),
            ("remove-location", "Disassociate a location."),
        ],
    },
    GroupSpec {
        base: "package",
        about: "Manipulate packages.",
        subcommands: &[CRUD_INFO, CRUD_LIST],
    },
    GroupSpec {
        base: "product",
        about: "Manipulate products.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("synchronize", "Sync all repositories for a product."),
            ("set-sync-plan", "Assign sync plan to product."),
            ("remove-sync-plan", "Delete assignment sync plan and product."),
        ],
    },
    GroupSpec {
        base: "puppet-module",
        about: "View Puppet module details.",
        subcommands: &[CRUD_INFO, CRUD_LIST],
    },
    GroupSpec {
        base: "repository",
        about: "Manipulate repositories.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("synchronize", "Sync a repository."),
            ("upload-content", "Upload content into the repository."),
            ("remove-content", "Remove content from a repository."),
            ("types", "Show the available repository types."),
        ],
    },
    GroupSpec {
        base: "role",
        about: "Manage user roles.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("filters", "List all filters."),
            ("clone", "Clone a role."),
        ],
    },
    GroupSpec {
        base: "settings",
        about: "Change server settings.",
        subcommands: &[CRUD_LIST, ("set", "Update a setting.")],
    },
    GroupSpec {
        base: "srpm",
        about: "View source RPMs.",
        subcommands: &[CRUD_INFO, CRUD_LIST],
    },
    GroupSpec {
        base: "task",
        about: "Tasks related actions.",
        subcommands: &[
            CRUD_INFO,
            CRUD_LIST,
            ("progress", "Show the progress of the task."),
            ("resume", "Resume all paused error tasks."),
        ],
    },
    GroupSpec {
        base: "user",
        about: "Manipulate users.",
        subcommands: &[
            CRUD_CREATE,
            CRUD_INFO,
            CRUD_LIST,
            CRUD_UPDATE,
            CRUD_DELETE,
            ("add-role", "Assign a user role."),
            ("remove-role", "Remove a user role."),
        ],
    },
];

/// Look up a catalogue entry by base name
pub fn find(base: &str) -> Option<&'static GroupSpec> {
    CATALOGUE.iter().find(|spec| spec.base == base)
}
