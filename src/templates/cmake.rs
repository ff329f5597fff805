//! Build descriptors: CMake projects for C and a plain Makefile for Go plugins.

pub const LIBRARY: &str = r#"cmake_minimum_required(VERSION 2.8)
project(lib{{ project_name }})

# Options
option(DEBUG "Enable/Disable debug library" ON)
option(SHARED "Enable/Disable the shared library version" ON)

include_directories(include)
include_directories("include/api")
include_directories("include/internal")

if(CMAKE_C_COMPILER_VERSION VERSION_GREATER 5)
    add_definitions(-fgnu89-inline)
endif()

if(DEBUG)
    set(CMAKE_BUILD_TYPE Debug)
else(DEBUG)
    set(CMAKE_BUILD_TYPE Release)
endif(DEBUG)

add_definitions("-Wall -Wextra -fPIC")
add_definitions("-DLIB{{ project_name_upper }}_COMPILE -D_GNU_SOURCE")

file(GLOB SOURCES "src/*.c")

set(SOURCE
    ${SOURCES})

set(VERSION_SCRIPT
    ${CMAKE_CURRENT_SOURCE_DIR}/misc/${PROJECT_NAME}.sym)

set(LIBRARY_HEADER
    ${CMAKE_CURRENT_SOURCE_DIR}/include/${PROJECT_NAME}.h)

execute_process(COMMAND grep MAJOR_VERSION ${LIBRARY_HEADER}
    COMMAND awk "{print $4}"
    COMMAND tr "\n" " "
    COMMAND sed "s/ //"
    OUTPUT_VARIABLE MAJOR_VERSION)

execute_process(COMMAND grep MINOR_VERSION ${LIBRARY_HEADER}
    COMMAND awk "{print $4}"
    COMMAND tr "\n" " "
    COMMAND sed "s/ //"
    OUTPUT_VARIABLE MINOR_VERSION)

execute_process(COMMAND grep RELEASE ${LIBRARY_HEADER}
    COMMAND awk "{print $4}"
    COMMAND tr "\n" " "
    COMMAND sed "s/ //"
    OUTPUT_VARIABLE RELEASE)

set(DESTINATION_BIN_DIR "/usr/local/lib")
set(DESTINATION_HEADER_DIR "/usr/local/include")

link_directories(${DESTINATION_BIN_DIR})

if(SHARED)
    add_library(${PROJECT_NAME} SHARED ${SOURCE})
    target_link_libraries(${PROJECT_NAME} {{ libcollections_linker }})
    set(LIB_VERSION ${MAJOR_VERSION}.${MINOR_VERSION}.${RELEASE})
    set_target_properties(${PROJECT_NAME} PROPERTIES VERSION ${LIB_VERSION}
        SOVERSION ${MAJOR_VERSION})

    set_target_properties(${PROJECT_NAME} PROPERTIES
                          LINK_FLAGS "-Wl,--version-script,${VERSION_SCRIPT}")
else(SHARED)
    add_library(${PROJECT_NAME} STATIC ${SOURCE})
endif(SHARED)

set_target_properties(${PROJECT_NAME} PROPERTIES PREFIX "")

install(TARGETS ${PROJECT_NAME} DESTINATION ${DESTINATION_BIN_DIR})
install(FILES ${LIBRARY_HEADER} DESTINATION ${DESTINATION_HEADER_DIR}/${PROJECT_NAME})
install(DIRECTORY ${CMAKE_CURRENT_SOURCE_DIR}/include/api DESTINATION ${DESTINATION_HEADER_DIR}/${PROJECT_NAME})
"#;

pub const APPLICATION: &str = r#"cmake_minimum_required(VERSION 2.8)
project({{ project_name }})

# Options
option(DEBUG "Enable/Disable debug version" ON)

include_directories(include)
include_directories("/usr/local/include")

if(CMAKE_C_COMPILER_VERSION VERSION_GREATER 5)
    add_definitions(-fgnu89-inline)
endif()

add_definitions("-Wall -Wextra -O0")

if(DEBUG)
    add_definitions("-ggdb")
endif(DEBUG)

file(GLOB SOURCES "src/*.c")
add_executable(${PROJECT_NAME} ${SOURCES})

link_directories("/usr/local/lib")
target_link_libraries(${PROJECT_NAME} {{ libcollections_linker }})

install(TARGETS ${PROJECT_NAME} DESTINATION /usr/local/bin)
"#;

pub const PLUGIN: &str = r#"cmake_minimum_required(VERSION 2.8)
project({{ project_name }})

# Options
option(DEBUG "Enable/Disable debug version" ON)

include_directories(include)
include_directories("/usr/local/include")

if(CMAKE_C_COMPILER_VERSION VERSION_GREATER 5)
    add_definitions(-fgnu89-inline)
endif()

add_definitions("-Wall -Wextra -O0 -fPIC -fvisibility=hidden -D_GNU_SOURCE")

if(DEBUG)
    add_definitions("-ggdb -g3")
endif(DEBUG)

file(GLOB SOURCES "src/*.c")

link_directories("/usr/local/lib")
add_library(${PROJECT_NAME} SHARED ${SOURCES})
target_link_libraries(${PROJECT_NAME} xante collections)
set_target_properties(${PROJECT_NAME} PROPERTIES
                      LINK_FLAGS "-Wl,-soname,${PROJECT_NAME}.so")

set_target_properties(${PROJECT_NAME} PROPERTIES SUFFIX .so)
set_target_properties(${PROJECT_NAME} PROPERTIES PREFIX "")
"#;

pub const GO_PLUGIN: &str = r#"
.PHONY: clean install purge

TARGET = {{ project_name }}.so

$(TARGET): src/plugin.go
	go build -o $(TARGET) -buildmode=c-shared src/plugin.go

clean:
	rm -f $(TARGET) {{ project_name }}.h

purge: clean $(TARGET)

install:
	cp -f $(TARGET) /usr/local/lib
"#;

pub const SYMBOL: &str = r#"LIB{{ project_name_upper }}_0.1 {
	global:
		*;
	local:
		*;
};
"#;
