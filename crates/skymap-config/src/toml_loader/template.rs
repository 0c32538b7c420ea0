//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Sky map configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[observer]
latitude = 51.4779       # -90 to 90, north positive
longitude = -0.0015      # -180 to 180, east positive
# time_speed = 1.0       # simulated seconds per real second

[layers.constellations]
# visible = true
# catalog = "/path/to/constellations.json"

[layers.continents]
# visible = true
# coastlines = "/path/to/coastlines.txt"
# vertex_stride = 5      # keep every Nth vertex, 1-1000

[layers.continents.refresh]
# min_interval_ms = 1000     # eager refreshes need this much simulated time
# startup_refreshes = 5      # eager refreshes after registration, 0-100
# steady_interval_ms = 10000 # afterwards, refresh at most this often

[renderer]
# frame_rate = 60        # 1-240
# tick_rate = 10         # producer ticks per second, 1-120
# max_sections_per_frame = 0  # 0 applies everything queued

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
