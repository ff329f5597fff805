//! C sources and headers.

pub const HEADER_COMMENT: &str = r#"
/*
 * Description:
 *
 * Author: {{ author }}
 * Created at: {{ date }}
 * Project: {{ project_name }}
 *
 * Copyright (C) {{ year }} {{ author }} All rights reserved.
 */
"#;

pub const MAIN_SOURCE: &str = r#"
int main(int argc, char **argv)
{
    const char *opt = "hv\0";
    int option;

    do {
        option = getopt(argc, argv, opt);

        switch (option) {
            case 'h':
                return 1;

            case 'v':
                return 1;

            case '?':
                return -1;
        }
    } while (option != -1);

    return 0;
}
"#;

pub const APPLICATION_HEADER: &str = r#"
/* Standard library headers */
#include <stdio.h>
#include <stdlib.h>
#include <unistd.h>
#include <stdbool.h>

/* External library headers */
{{ libcollections_include }}

/* Internal headers */
#include "{{ project_name }}_def.h"
#include "{{ project_name }}_struct.h"
#include "{{ project_name }}_prt.h"
"#;

pub const APPLICATION_DEFINES: &str = r#"
#define MAJOR_VERSION           0
#define MINOR_VERSION           1
#define RELEASE                 1
#define BETA                    true

#define APP_NAME                "{{ project_name }}"
"#;

pub const LIBRARY_HEADER: &str = r#"
{{ libcollections_include }}

#ifdef LIB{{ project_name_upper }}_COMPILE
# define MAJOR_VERSION          0
# define MINOR_VERSION          1
# define RELEASE                1

# include "internal/internal.h"
#endif

{{ include_files }}"#;

pub const LIBRARY_INTERNAL_HEADER: &str = r#"
/*
 * An internal representation of a public function. It does not affect the code
 * or the function visibility. Its objective is only to let clear what is and
 * what is not been exported from library by looking at the code.
 *
 * Every exported function must have this at the beginning of its declaration.
 * Example:
 *
 * __PUB_API__ const char *function(int arg)
 * {
 *      // Body
 * }
 */
#define __PUB_API__

/* Internal library API */
{{ include_files }}"#;

pub const ERROR_SOURCE: &str = r#"
static const char *__description[] = {
    cl_tr_noop("Ok"),
};

static const char *__unknown_error = cl_tr_noop("Unknown error");

struct error_storage {
    int error;
};

cl_error_storage_declare(__storage__, sizeof(struct error_storage))
#define __cerrno        (cl_errno_storage(&__storage__))

void errno_clear(void)
{
    struct error_storage *e = __cerrno;

    e->error = {{ project_name_upper }}_NO_ERROR;
}

void errno_set(enum {{ project_name_snake }}_error_code code)
{
    struct error_storage *e = __cerrno;

    e->error = code;
}

__PUB_API__ enum {{ project_name_snake }}_error_code {{ project_name_snake }}_get_last_error(void)
{
    struct error_storage *e = __cerrno;

    return e->error;
}

__PUB_API__ const char *{{ project_name_snake }}_strerror(enum {{ project_name_snake }}_error_code code)
{
    if (code >= {{ project_name_upper }}_MAX_ERROR_CODE)
        return __unknown_error;

    return __description[code];
}
"#;

pub const INTERNAL_ERROR_HEADER: &str = r#"
enum {{ project_name_snake }}_error_code {
    {{ project_name_upper }}_NO_ERROR,

    {{ project_name_upper }}_MAX_ERROR_CODE
};

void errno_clear(void);
void errno_set(enum {{ project_name_snake }}_error_code code);
"#;

pub const API_ERROR_HEADER: &str = r#"
enum {{ project_name_snake }}_error_code {{ project_name_snake }}_get_last_error(void);
const char *{{ project_name_snake }}_strerror(enum {{ project_name_snake }}_error_code code);
"#;
