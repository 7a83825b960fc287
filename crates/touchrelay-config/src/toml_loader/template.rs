//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Touch relay configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[host]
# debug = false            # instrumentation marks for intercepted/sent events
# timestamps = true        # stamp relay messages with send time while debugging
# overlay_id = "iframe-relay-touches-overlay"
# overlay_z_index = 1000

[zone]
# debug = false            # markers at received points + instrumentation marks
# marker_delay_ms = 1000   # 50-60000
# marker_size = 30.0       # 1-200
# marker_class = "debug-iframe-relay-point"

[logging]
# level = "info"           # trace | debug | info | warn | error
"##
}
