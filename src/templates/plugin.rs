//! libxante plugin entry points, in C and in Go.

pub const C_HEADER: &str = r#"
/* External libraries */
#include <collections.h>
#include <libxante.h>
"#;

pub const C_SOURCE: &str = r#"
#define __EXPORT__      __attribute__((visibility("default")))

/* Plugin information */
__EXPORT__ const char *plugin_name(void)
{
    return "{{ project_name }}";
}

__EXPORT__ const char *plugin_version(void)
{
    return "0.1";
}

__EXPORT__ const char *plugin_author(void)
{
    return "{{ author }}";
}

__EXPORT__ const char *plugin_description(void)
{
    return "{{ project_name }} plugin";
}

/* Called once when the plugin is loaded */
__EXPORT__ int plugin_init(void)
{
    return 0;
}

/* Called once before the plugin is unloaded */
__EXPORT__ void plugin_uninit(void)
{
}

/* Called on every ui event forwarded by libxante */
__EXPORT__ int plugin_ui_event(const char *event, void *data)
{
    (void)event;
    (void)data;

    return 0;
}
"#;

/// Package clause and cgo import. Go requires them ahead of any code.
pub const GO_PREAMBLE: &str = "\npackage main\n\nimport \"C\"\n";

pub const GO_SOURCE: &str = r#"
//export plugin_name
func plugin_name() *C.char {
	return C.CString("{{ project_name }}")
}

//export plugin_version
func plugin_version() *C.char {
	return C.CString("0.1")
}

//export plugin_author
func plugin_author() *C.char {
	return C.CString("{{ author }}")
}

//export plugin_description
func plugin_description() *C.char {
	return C.CString("{{ project_name }} plugin")
}

//export plugin_init
func plugin_init() C.int {
	return 0
}

//export plugin_uninit
func plugin_uninit() {
}

//export plugin_ui_event
func plugin_ui_event(event *C.char, data *C.void) C.int {
	return 0
}

func main() {}
"#;

pub const LAUNCH_SCRIPT: &str = r#"
PLUGIN_NAME={{ project_name }}
PLUGIN_PATH=/usr/local/lib/${PLUGIN_NAME}.so
JTF_PATH=/usr/local/share/${PLUGIN_NAME}/${PLUGIN_NAME}.jtf

if [ ! -f "${PLUGIN_PATH}" ]; then
    echo "${PLUGIN_PATH} not found"
    exit 1
fi

xante -j "${JTF_PATH}" -p "${PLUGIN_PATH}" "$@"
"#;
