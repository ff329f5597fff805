//! Shell scripts and plain text files of a package.

pub const HEADER_COMMENT: &str = r#"#!/bin/bash
#
# Description:
#
# Author: {{ author }}
# Created at: {{ date }}
# Project: {{ project_name }}
#
# Copyright (C) {{ year }} {{ author }} All rights reserved.
#
"#;

pub const SHEBANG: &str = "#!/bin/bash\n";

pub const BUILD_PACKAGE: &str = r#"
PROJECT={{ project_name }}
PACKAGE_DIR=$(cd "$(dirname "$0")" && pwd)
SOURCE_DIR=${PACKAGE_DIR}/../{{ project_dir }}
BUILD_DIR=$(mktemp -d)
STAGE_DIR=${BUILD_DIR}/stage

trap 'rm -rf "${BUILD_DIR}"' EXIT

(cd "${BUILD_DIR}" && cmake -DDEBUG=OFF "${SOURCE_DIR}" && make) || exit 1
(cd "${BUILD_DIR}" && make DESTDIR="${STAGE_DIR}" install) || exit 1

mkdir -p "${STAGE_DIR}/DEBIAN" "${STAGE_DIR}/lib/systemd/system"
cp "${PACKAGE_DIR}"/debian/* "${STAGE_DIR}/DEBIAN/"
cp "${PACKAGE_DIR}/misc/{{ project_name|lower }}.service" "${STAGE_DIR}/lib/systemd/system/"

cat > "${STAGE_DIR}/DEBIAN/control" << EOF
Package: ${PROJECT}
Version: 0.1
Architecture: $(dpkg --print-architecture)
Maintainer: {{ author }}
Description: ${PROJECT}
EOF

dpkg-deb --build "${STAGE_DIR}" "${PACKAGE_DIR}/${PROJECT}.deb" || exit 1
"#;

pub const SYSTEMD_SERVICE: &str = r#"[Unit]
Description={{ project_name }}
After=network.target

[Service]
Type=simple
User=root
WorkingDirectory=/usr/local/bin
ExecStart=/usr/local/bin/{{ project_name }}
Restart=always
RestartSec=1

[Install]
WantedBy=multi-user.target
"#;
